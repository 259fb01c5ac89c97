//! Project details carried on each project card as `data-*` attributes, and
//! the blocks the modal body is built from.

pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const DEFAULT_TITLE: &str = "Project";

const TITLE_ATTR: &str = "data-title";
const SUBTITLE_ATTR: &str = "data-subtitle";
const ARCHITECTURE_ATTR: &str = "data-architecture";
const CAPABILITIES_ATTR: &str = "data-capabilities";
const ADVANTAGES_ATTR: &str = "data-advantages";
const USAGE_ATTR: &str = "data-usage";
const RATIONALE_ATTR: &str = "data-why";

const LIST_SEPARATOR: char = '|';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub subtitle: String,
    pub architecture: Vec<String>,
    pub capabilities: Vec<String>,
    pub advantages: Vec<String>,
    pub usage: String,
    pub rationale: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalBlock {
    List {
        heading: &'static str,
        items: Vec<String>,
    },
    Note {
        label: &'static str,
        text: String,
    },
}

/// Splits a `|`-delimited attribute into trimmed, non-empty entries.
pub fn split_items(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl ProjectDetails {
    /// Reads a card through an attribute getter. Missing attributes become
    /// empty strings or lists.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            title: lookup(TITLE_ATTR).unwrap_or_default(),
            subtitle: lookup(SUBTITLE_ATTR).unwrap_or_default(),
            architecture: split_items(lookup(ARCHITECTURE_ATTR).as_deref()),
            capabilities: split_items(lookup(CAPABILITIES_ATTR).as_deref()),
            advantages: split_items(lookup(ADVANTAGES_ATTR).as_deref()),
            usage: lookup(USAGE_ATTR).unwrap_or_default(),
            rationale: lookup(RATIONALE_ATTR).unwrap_or_default(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    pub fn blocks(&self) -> Vec<ModalBlock> {
        vec![
            ModalBlock::List {
                heading: "Architecture",
                items: self.architecture.clone(),
            },
            ModalBlock::List {
                heading: "Capabilities",
                items: self.capabilities.clone(),
            },
            ModalBlock::List {
                heading: "Advantages",
                items: self.advantages.clone(),
            },
            ModalBlock::Note {
                label: "Real-world usage:",
                text: self.usage.clone(),
            },
            ModalBlock::Note {
                label: "Why it is better:",
                text: self.rationale.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn card(pairs: &[(&str, &str)]) -> ProjectDetails {
        let attrs: HashMap<&str, &str> = pairs.iter().copied().collect();
        ProjectDetails::from_lookup(|name| attrs.get(name).map(|value| value.to_string()))
    }

    fn list_items<'a>(blocks: &'a [ModalBlock], wanted: &str) -> &'a [String] {
        blocks
            .iter()
            .find_map(|block| match block {
                ModalBlock::List { heading, items } if *heading == wanted => Some(items.as_slice()),
                _ => None,
            })
            .expect("list section present")
    }

    #[test]
    fn architecture_list_is_split_and_trimmed() {
        let details = card(&[("data-architecture", "API Gateway | Cache | Queue")]);
        assert_eq!(
            list_items(&details.blocks(), "Architecture"),
            ["API Gateway", "Cache", "Queue"]
        );
    }

    #[test]
    fn whitespace_only_segments_render_no_items() {
        let details = card(&[("data-capabilities", " |  | \t|")]);
        assert!(list_items(&details.blocks(), "Capabilities").is_empty());
        assert!(split_items(Some("")).is_empty());
        assert!(split_items(None).is_empty());
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let details = card(&[]);
        assert_eq!(details, ProjectDetails::default());
        assert_eq!(details.display_title(), "Project");
        assert_eq!(details.blocks().len(), 5);
    }

    #[test]
    fn blocks_follow_fixed_order_with_notes_last() {
        let details = card(&[
            ("data-title", "Relay"),
            ("data-subtitle", "Event bus"),
            ("data-advantages", "Fast|Small"),
            ("data-usage", "Runs the order pipeline."),
            ("data-why", "Fewer moving parts."),
        ]);
        assert_eq!(details.display_title(), "Relay");
        assert_eq!(details.subtitle, "Event bus");

        let blocks = details.blocks();
        let headings: Vec<&str> = blocks
            .iter()
            .map(|block| match block {
                ModalBlock::List { heading, .. } => *heading,
                ModalBlock::Note { label, .. } => *label,
            })
            .collect();
        assert_eq!(
            headings,
            [
                "Architecture",
                "Capabilities",
                "Advantages",
                "Real-world usage:",
                "Why it is better:"
            ]
        );
        assert_eq!(
            blocks[4],
            ModalBlock::Note {
                label: "Why it is better:",
                text: "Fewer moving parts.".to_string(),
            }
        );
    }
}
