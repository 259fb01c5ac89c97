use super::{select_all, select_all_within, set_style, FxError};
use crate::config::EffectConfig;
use crate::motion::MotionPreference;
use crate::stagger::{
    css_millis, hero_delay_ms, section_delay_ms, RevealLedger, HERO_STAGGER_SELECTOR,
    IN_VIEW_CLASS, REVEAL_SELECTOR, STAGGER_IN_CLASS, STAGGER_ITEM_CLASS, STAGGER_SELECTORS,
};
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

fn stagger_hero(
    document: &Document,
    motion: MotionPreference,
    config: &EffectConfig,
) -> Result<(), FxError> {
    let items = select_all(document, HERO_STAGGER_SELECTOR)?;
    if items.is_empty() {
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        let _ = item.class_list().add_1(STAGGER_ITEM_CLASS);
        set_style(
            item,
            "transition-delay",
            &css_millis(hero_delay_ms(index, motion, config)),
        );
    }

    // The delays must land in a frame before `stagger-in` does or the
    // transition starts from the final state.
    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
    let slot = Rc::clone(&pending);
    let handle = request_animation_frame(move |_| {
        slot.borrow_mut().take();
        for item in &items {
            let _ = item.class_list().add_1(STAGGER_IN_CLASS);
        }
    });
    *pending.borrow_mut() = Some(handle);

    Ok(())
}

fn stagger_section(section: &Element, motion: MotionPreference, config: &EffectConfig) {
    let Ok(items) = select_all_within(section, &format!(".{STAGGER_ITEM_CLASS}")) else {
        return;
    };

    for (index, item) in items.iter().enumerate() {
        if item.class_list().contains(STAGGER_IN_CLASS) {
            continue;
        }
        set_style(
            item,
            "transition-delay",
            &css_millis(section_delay_ms(index, motion, config)),
        );
        let _ = item.class_list().add_1(STAGGER_IN_CLASS);
    }
}

pub(super) fn install(
    document: &Document,
    motion: MotionPreference,
    config: &EffectConfig,
) -> Result<bool, FxError> {
    for item in select_all(document, &STAGGER_SELECTORS.join(","))? {
        let _ = item.class_list().add_1(STAGGER_ITEM_CLASS);
    }

    stagger_hero(document, motion, config)?;

    let sections = select_all(document, REVEAL_SELECTOR)?;
    if sections.is_empty() {
        return Ok(false);
    }

    let config = *config;
    let tracked = sections.clone();
    let mut ledger = RevealLedger::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let section = entry.target();
                observer.unobserve(&section);

                let Some(position) = tracked.iter().position(|candidate| *candidate == section)
                else {
                    continue;
                };
                if !ledger.reveal(position) {
                    continue;
                }

                let _ = section.class_list().add_1(IN_VIEW_CLASS);
                stagger_section(&section, motion, &config);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in &sections {
        observer.observe(section);
    }
    callback.forget();

    tracing::debug!(sections = sections.len(), "observing reveal sections");
    Ok(true)
}
