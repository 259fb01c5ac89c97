use crate::project::ProjectDetails;

pub const MODAL_ID: &str = "project-modal";
pub const MODAL_OPEN_CLASS: &str = "open";
pub const BODY_LOCK_CLASS: &str = "modal-open";

/// Open/closed state of the project modal, generic over whatever the host
/// uses to identify the element that had focus before opening.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState<F> {
    open: bool,
    content: Option<ProjectDetails>,
    last_focused: Option<F>,
    generation: u64,
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self {
            open: false,
            content: None,
            last_focused: None,
            generation: 0,
        }
    }
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last opened project. Kept after closing so the dialog can animate out
    /// with its content intact.
    pub fn content(&self) -> Option<&ProjectDetails> {
        self.content.as_ref()
    }

    /// Bumped on every open so the rendered body can be replaced wholesale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_focused(&self) -> Option<&F> {
        self.last_focused.as_ref()
    }

    /// Shows `details`, replacing anything already displayed.
    pub fn open(&mut self, details: ProjectDetails, focused: Option<F>) {
        self.open = true;
        self.content = Some(details);
        self.last_focused = focused;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Hides the modal. Returns `None` when it was already closed, otherwise
    /// the element to restore focus to (which may itself be absent).
    pub fn close(&mut self) -> Option<Option<F>> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.last_focused.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, architecture: &[&str]) -> ProjectDetails {
        ProjectDetails {
            title: title.to_string(),
            architecture: architecture.iter().map(|item| item.to_string()).collect(),
            ..ProjectDetails::default()
        }
    }

    #[test]
    fn reopen_replaces_content_entirely() {
        let mut modal = ModalState::<&str>::default();
        modal.open(project("A", &["Kafka", "Redis"]), Some("card-a"));
        let first_generation = modal.generation();

        modal.open(project("B", &["Postgres"]), Some("card-b"));

        let shown = modal.content().expect("modal is open");
        assert_eq!(shown, &project("B", &["Postgres"]));
        assert!(modal.is_open());
        assert_ne!(modal.generation(), first_generation);
    }

    #[test]
    fn close_restores_focus_recorded_at_open() {
        let mut modal = ModalState::default();
        modal.open(project("A", &[]), Some("nav-link"));
        assert_eq!(modal.last_focused(), Some(&"nav-link"));

        assert_eq!(modal.close(), Some(Some("nav-link")));
        assert!(!modal.is_open());
        assert_eq!(modal.last_focused(), None);
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let mut modal = ModalState::<&str>::default();
        assert_eq!(modal.close(), None);

        modal.open(project("A", &[]), None);
        assert_eq!(modal.close(), Some(None));
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn repeated_escape_closes_exactly_once() {
        let mut modal = ModalState::default();
        modal.open(project("A", &[]), Some(7_u32));

        let closes = (0..3).filter_map(|_| modal.close()).count();
        assert_eq!(closes, 1);
    }
}
