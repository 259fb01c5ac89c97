use super::{select_all, FxError};
use crate::modal::{ModalState, BODY_LOCK_CLASS, MODAL_ID, MODAL_OPEN_CLASS};
use crate::project::{ModalBlock, ProjectDetails, DEFAULT_TITLE, PROJECT_CARD_SELECTOR};
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct ModalView {
    state: ModalState<HtmlElement>,
    restore_focus: Option<HtmlElement>,
}

enum ModalAction {
    Open {
        details: ProjectDetails,
        focused: Option<HtmlElement>,
    },
    Close,
}

impl Reducible for ModalView {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::Open { details, focused } => {
                next.state.open(details, focused);
                next.restore_focus = None;
            }
            ModalAction::Close => match next.state.close() {
                Some(target) => next.restore_focus = target,
                None => return self,
            },
        }
        Rc::new(next)
    }
}

fn sync_visibility(host: &HtmlElement, open: bool) {
    let _ = host.class_list().toggle_with_force(MODAL_OPEN_CLASS, open);
    let _ = host.set_attribute("aria-hidden", if open { "false" } else { "true" });

    if let Some(body) = host.owner_document().and_then(|document| document.body()) {
        let _ = body.class_list().toggle_with_force(BODY_LOCK_CLASS, open);
    }
}

fn restore_focus(element: &HtmlElement) {
    if element.is_connected() {
        let _ = element.focus();
    }
}

fn bind_triggers(
    cards: &[Element],
    dispatcher: UseReducerDispatcher<ModalView>,
) -> Vec<EventListener> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(cards.len() + 1);
    for card in cards {
        let source = card.clone();
        let active = document.clone();
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new(card, "click", move |_| {
            let details = ProjectDetails::from_lookup(|name| source.get_attribute(name));
            let focused = active
                .active_element()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());
            dispatcher.dispatch(ModalAction::Open { details, focused });
        }));
    }

    listeners.push(EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() == "Escape" {
            dispatcher.dispatch(ModalAction::Close);
        }
    }));

    listeners
}

fn render_block(block: &ModalBlock) -> Html {
    match block {
        ModalBlock::List { heading, items } => html! {
            <div class="modal-section">
                <h4>{*heading}</h4>
                <ul>
                    { for items.iter().map(|item| html! { <li>{item.clone()}</li> }) }
                </ul>
            </div>
        },
        ModalBlock::Note { label, text } => html! {
            <p class="modal-note">
                <strong>{*label}</strong>
                {format!(" {text}")}
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    host: HtmlElement,
    cards: Vec<Element>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let view = use_reducer(ModalView::default);
    let close_ref = use_node_ref();

    {
        let cards = props.cards.clone();
        let dispatcher = view.dispatcher();
        use_effect_with((), move |_| {
            let listeners = bind_triggers(&cards, dispatcher);
            move || drop(listeners)
        });
    }

    {
        let host = props.host.clone();
        let close_ref = close_ref.clone();
        let restore = view.restore_focus.clone();
        use_effect_with(
            (view.state.is_open(), view.state.generation()),
            move |(open, _)| {
                sync_visibility(&host, *open);
                if *open {
                    if let Some(button) = close_ref.cast::<HtmlElement>() {
                        let _ = button.focus();
                    }
                } else if let Some(element) = restore.as_ref() {
                    restore_focus(element);
                }
                || ()
            },
        );
    }

    let on_close = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ModalAction::Close))
    };

    let details = view.state.content();
    let title = details.map_or(DEFAULT_TITLE, ProjectDetails::display_title);
    let subtitle = details.map(|d| d.subtitle.as_str()).unwrap_or_default();
    let blocks = details.map(ProjectDetails::blocks).unwrap_or_default();

    html! {
        <>
            <div class="modal-backdrop" data-modal-close="" onclick={on_close.clone()}></div>
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
            >
                <button
                    class="modal-close"
                    type="button"
                    aria-label="Close project details"
                    data-modal-close=""
                    ref={close_ref}
                    onclick={on_close}
                >
                    <span aria-hidden="true">{"×"}</span>
                </button>
                <h3 id="modal-title">{title.to_string()}</h3>
                <p id="modal-subtitle" class="modal-subtitle">{subtitle.to_string()}</p>
                <div id="modal-body" class="modal-body">
                    <div class="modal-sections" key={view.state.generation().to_string()}>
                        { for blocks.iter().map(render_block) }
                    </div>
                </div>
            </div>
        </>
    }
}

pub(super) fn install(document: &Document) -> Result<bool, FxError> {
    let Some(host) = document.get_element_by_id(MODAL_ID) else {
        return Ok(false);
    };
    let cards = select_all(document, PROJECT_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(false);
    }

    let host: HtmlElement = host.dyn_into().map_err(|_| FxError::NotHtml(MODAL_ID))?;
    yew::Renderer::<ProjectModal>::with_root_and_props(
        host.clone().into(),
        ProjectModalProps { host, cards },
    )
    .render();

    Ok(true)
}
