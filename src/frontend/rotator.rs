use super::FxError;
use crate::config::EffectConfig;
use crate::motion::MotionPreference;
use crate::rotator::{WordRotator, FADE_CLASS, ROTATOR_SELECTOR, WORDS_ATTR};
use gloo_timers::callback::{Interval, Timeout};
use std::{cell::RefCell, rc::Rc};
use web_sys::{Document, Element};

fn swap_word(element: &Element, rotator: &RefCell<WordRotator>) {
    if let Some(word) = rotator.borrow_mut().complete_fade() {
        element.set_text_content(Some(word));
    }
    let _ = element.class_list().remove_1(FADE_CLASS);
}

pub(super) fn install(
    document: &Document,
    motion: MotionPreference,
    config: &EffectConfig,
) -> Result<bool, FxError> {
    let Some(element) = document.query_selector(ROTATOR_SELECTOR)? else {
        return Ok(false);
    };

    let rotator = WordRotator::from_config(element.get_attribute(WORDS_ATTR).as_deref());
    if let Some(word) = rotator.current() {
        element.set_text_content(Some(word));
    }

    if !rotator.should_animate(motion) {
        return Ok(false);
    }

    let fade_ms = config.fade_ms;
    let rotator = Rc::new(RefCell::new(rotator));
    Interval::new(config.rotate_interval_ms, move || {
        if !rotator.borrow_mut().begin_fade() {
            return;
        }
        let _ = element.class_list().add_1(FADE_CLASS);

        let rotator = Rc::clone(&rotator);
        let element = element.clone();
        Timeout::new(fade_ms, move || swap_word(&element, &rotator)).forget();
    })
    .forget();

    Ok(true)
}
