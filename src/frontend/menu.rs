use super::{select_all_within, FxError};
use crate::menu::MenuState;
use gloo_events::EventListener;
use std::{cell::Cell, rc::Rc};
use web_sys::{Document, Element};

const TOGGLE_SELECTOR: &str = ".menu-toggle";
const NAV_SELECTOR: &str = ".nav";
const OPEN_CLASS: &str = "open";

fn apply_menu(toggle: &Element, nav: &Element, menu: MenuState) {
    let _ = nav.class_list().toggle_with_force(OPEN_CLASS, menu.is_open());
    let _ = toggle.class_list().toggle_with_force(OPEN_CLASS, menu.is_open());
    let _ = toggle.set_attribute("aria-expanded", menu.aria_expanded());
}

pub(super) fn install(document: &Document) -> Result<bool, FxError> {
    let (Some(toggle), Some(nav)) = (
        document.query_selector(TOGGLE_SELECTOR)?,
        document.query_selector(NAV_SELECTOR)?,
    ) else {
        return Ok(false);
    };

    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let state = Rc::clone(&state);
        let (toggle_target, nav_target) = (toggle.clone(), nav.clone());
        EventListener::new(&toggle, "click", move |_| {
            let next = state.get().toggled();
            state.set(next);
            apply_menu(&toggle_target, &nav_target, next);
        })
        .forget();
    }

    for link in select_all_within(&nav, "a")? {
        let state = Rc::clone(&state);
        let (toggle_target, nav_target) = (toggle.clone(), nav.clone());
        EventListener::new(&link, "click", move |_| {
            state.set(MenuState::closed());
            apply_menu(&toggle_target, &nav_target, MenuState::closed());
        })
        .forget();
    }

    Ok(true)
}
