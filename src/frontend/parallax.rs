use super::{set_style, FxError};
use crate::config::EffectConfig;
use crate::motion::MotionPreference;
use crate::parallax::{css_px, Parallax, HERO_SELECTOR};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, MouseEvent, Window};

fn viewport_size(win: &Window) -> (f64, f64) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

struct HeroLoop {
    hero: Element,
    parallax: RefCell<Parallax>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl HeroLoop {
    fn tick(self: &Rc<Self>) {
        let (x, y) = self.parallax.borrow_mut().step();
        set_style(&self.hero, "--mx", &css_px(x));
        set_style(&self.hero, "--my", &css_px(y));

        let hero_loop = Rc::clone(self);
        let handle = request_animation_frame(move |_| hero_loop.tick());
        *self.frame.borrow_mut() = Some(handle);
    }
}

pub(super) fn install(
    document: &Document,
    motion: MotionPreference,
    config: &EffectConfig,
) -> Result<bool, FxError> {
    if motion.is_reduced() {
        return Ok(false);
    }
    let Some(hero) = document.query_selector(HERO_SELECTOR)? else {
        return Ok(false);
    };
    let Some(win) = window() else {
        return Ok(false);
    };

    let hero_loop = Rc::new(HeroLoop {
        hero,
        parallax: RefCell::new(Parallax::new(config)),
        frame: RefCell::new(None),
    });

    {
        let hero_loop = Rc::clone(&hero_loop);
        let viewport_source = win.clone();
        EventListener::new(&win, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            hero_loop.parallax.borrow_mut().point_at(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                viewport_size(&viewport_source),
            );
        })
        .forget();
    }

    hero_loop.tick();
    Ok(true)
}
