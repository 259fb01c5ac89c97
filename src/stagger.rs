use crate::config::EffectConfig;
use crate::motion::MotionPreference;

pub const STAGGER_ITEM_CLASS: &str = "stagger-item";
pub const STAGGER_IN_CLASS: &str = "stagger-in";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const HERO_STAGGER_SELECTOR: &str = ".hero-content > *, .hero-panel > *";

pub const STAGGER_SELECTORS: &[&str] = &[
    ".mission-grid > *",
    ".focus-grid > *",
    ".tools-grid > *",
    ".projects-grid > *",
    ".timeline-item",
    ".skills-grid > *",
    ".cert-grid > *",
    ".education-grid > *",
    ".lang-row > *",
    ".contact-grid > *",
];

/// Entrance delay for the `index`th hero child, which animates on load.
pub fn hero_delay_ms(index: usize, motion: MotionPreference, config: &EffectConfig) -> u64 {
    if motion.is_reduced() {
        return 0;
    }
    u64::from(config.hero_base_ms) + index as u64 * u64::from(config.hero_step_ms)
}

/// Entrance delay for the `index`th stagger item inside a revealed section.
pub fn section_delay_ms(index: usize, motion: MotionPreference, config: &EffectConfig) -> u64 {
    if motion.is_reduced() {
        return 0;
    }
    index as u64 * u64::from(config.stagger_step_ms)
}

pub fn css_millis(delay_ms: u64) -> String {
    format!("{delay_ms}ms")
}

/// Tracks which sections have already been revealed so each one fires once.
#[derive(Debug, Default)]
pub struct RevealLedger {
    revealed: Vec<usize>,
}

impl RevealLedger {
    /// Returns true only the first time `section` is reported as visible.
    pub fn reveal(&mut self, section: usize) -> bool {
        if self.revealed.contains(&section) {
            return false;
        }
        self.revealed.push(section);
        true
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
