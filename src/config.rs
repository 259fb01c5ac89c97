const DEFAULT_ROTATE_INTERVAL_MS: u32 = 2_400;
const DEFAULT_FADE_MS: u32 = 350;
const DEFAULT_PARALLAX_SMOOTHING: f64 = 0.08;
const DEFAULT_PARALLAX_RANGE_PX: f64 = 40.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
const DEFAULT_STAGGER_STEP_MS: u32 = 80;
const DEFAULT_HERO_BASE_MS: u32 = 120;
const DEFAULT_HERO_STEP_MS: u32 = 90;

const ROTATE_INTERVAL_MS_BOUNDS: (u32, u32) = (500, 60_000);
const FADE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const PARALLAX_SMOOTHING_BOUNDS: (f64, f64) = (0.01, 1.0);
const PARALLAX_RANGE_PX_BOUNDS: (f64, f64) = (0.0, 200.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const STAGGER_STEP_MS_BOUNDS: (u32, u32) = (0, 1_000);
const HERO_BASE_MS_BOUNDS: (u32, u32) = (0, 2_000);
const HERO_STEP_MS_BOUNDS: (u32, u32) = (0, 1_000);

pub const ROTATE_INTERVAL_ATTR: &str = "data-fx-rotate-interval-ms";
pub const FADE_ATTR: &str = "data-fx-fade-ms";
pub const PARALLAX_SMOOTHING_ATTR: &str = "data-fx-parallax-smoothing";
pub const PARALLAX_RANGE_ATTR: &str = "data-fx-parallax-range-px";
pub const REVEAL_THRESHOLD_ATTR: &str = "data-fx-reveal-threshold";
pub const STAGGER_STEP_ATTR: &str = "data-fx-stagger-step-ms";
pub const HERO_BASE_ATTR: &str = "data-fx-hero-base-ms";
pub const HERO_STEP_ATTR: &str = "data-fx-hero-step-ms";

/// Timing and tuning values shared by the page effects.
///
/// The rotation interval and the fade delay are independent: the fade delay
/// is the point inside each cycle where the word is swapped, and nothing ties
/// it to the interval length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectConfig {
    pub rotate_interval_ms: u32,
    pub fade_ms: u32,
    pub parallax_smoothing: f64,
    pub parallax_range_px: f64,
    pub reveal_threshold: f64,
    pub stagger_step_ms: u32,
    pub hero_base_ms: u32,
    pub hero_step_ms: u32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: DEFAULT_ROTATE_INTERVAL_MS,
            fade_ms: DEFAULT_FADE_MS,
            parallax_smoothing: DEFAULT_PARALLAX_SMOOTHING,
            parallax_range_px: DEFAULT_PARALLAX_RANGE_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            hero_base_ms: DEFAULT_HERO_BASE_MS,
            hero_step_ms: DEFAULT_HERO_STEP_MS,
        }
    }
}

impl EffectConfig {
    /// Builds a config from `data-fx-*` style overrides. Values that fail to
    /// parse or fall outside their bounds keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rotate_interval_ms: parse_u32_with_bounds(
                &lookup,
                ROTATE_INTERVAL_ATTR,
                DEFAULT_ROTATE_INTERVAL_MS,
                ROTATE_INTERVAL_MS_BOUNDS,
            ),
            fade_ms: parse_u32_with_bounds(&lookup, FADE_ATTR, DEFAULT_FADE_MS, FADE_MS_BOUNDS),
            parallax_smoothing: parse_f64_with_bounds(
                &lookup,
                PARALLAX_SMOOTHING_ATTR,
                DEFAULT_PARALLAX_SMOOTHING,
                PARALLAX_SMOOTHING_BOUNDS,
            ),
            parallax_range_px: parse_f64_with_bounds(
                &lookup,
                PARALLAX_RANGE_ATTR,
                DEFAULT_PARALLAX_RANGE_PX,
                PARALLAX_RANGE_PX_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                REVEAL_THRESHOLD_ATTR,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            stagger_step_ms: parse_u32_with_bounds(
                &lookup,
                STAGGER_STEP_ATTR,
                DEFAULT_STAGGER_STEP_MS,
                STAGGER_STEP_MS_BOUNDS,
            ),
            hero_base_ms: parse_u32_with_bounds(
                &lookup,
                HERO_BASE_ATTR,
                DEFAULT_HERO_BASE_MS,
                HERO_BASE_MS_BOUNDS,
            ),
            hero_step_ms: parse_u32_with_bounds(
                &lookup,
                HERO_STEP_ATTR,
                DEFAULT_HERO_STEP_MS,
                HERO_STEP_MS_BOUNDS,
            ),
        }
    }
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
