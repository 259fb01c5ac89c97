use crate::config::EffectConfig;
use crate::motion::read_motion_preference;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, NodeList};

mod glow;
mod menu;
mod modal;
mod parallax;
mod reveal;
mod rotator;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("#{0} is not an HTML element")]
    NotHtml(&'static str),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(document.query_selector_all(selector)?))
}

fn select_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn read_effect_config(document: &Document) -> EffectConfig {
    match document.body() {
        Some(body) => EffectConfig::from_lookup(|name| body.get_attribute(name)),
        None => EffectConfig::default(),
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(document) = window().and_then(|w| w.document()) else {
        tracing::warn!("no document available, page effects disabled");
        return;
    };

    let motion = read_motion_preference();
    let config = read_effect_config(&document);

    let outcomes = [
        ("menu", menu::install(&document)),
        ("glow", glow::install(&document, motion)),
        ("reveal", reveal::install(&document, motion, &config)),
        ("rotator", rotator::install(&document, motion, &config)),
        ("parallax", parallax::install(&document, motion, &config)),
        ("modal", modal::install(&document)),
    ];

    let mut active = Vec::new();
    for (component, outcome) in outcomes {
        match outcome {
            Ok(true) => active.push(component),
            Ok(false) => tracing::debug!(component, "component inactive"),
            Err(error) => tracing::warn!(component, %error, "component failed to install"),
        }
    }

    tracing::info!(motion = motion.as_str(), ?active, "page effects installed");
}
