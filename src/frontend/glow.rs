use super::{select_all, set_style, FxError};
use crate::glow::{css_percent, glow_position, Rect, GLOW_CENTER, GLOW_CLASS, GLOW_SELECTORS};
use crate::motion::MotionPreference;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, PointerEvent};

fn set_glow(element: &Element, (x, y): (f64, f64)) {
    set_style(element, "--mx", &css_percent(x));
    set_style(element, "--my", &css_percent(y));
}

pub(super) fn install(document: &Document, motion: MotionPreference) -> Result<bool, FxError> {
    for element in select_all(document, &GLOW_SELECTORS.join(","))? {
        let _ = element.class_list().add_1(GLOW_CLASS);
    }

    if motion.is_reduced() {
        return Ok(false);
    }

    let targets = select_all(document, &format!(".{GLOW_CLASS}"))?;
    if targets.is_empty() {
        return Ok(false);
    }

    for element in targets {
        let target = element.clone();
        EventListener::new(&element, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let bounds = target.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            let position = glow_position(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect,
            );
            set_glow(&target, position);
        })
        .forget();

        let target = element.clone();
        EventListener::new(&element, "pointerleave", move |_| {
            set_glow(&target, GLOW_CENTER);
        })
        .forget();
    }

    Ok(true)
}
