pub const GLOW_CLASS: &str = "glow-track";

pub const GLOW_SELECTORS: &[&str] = &[
    ".panel-card",
    ".focus-card",
    ".project-card",
    ".tool-card",
    ".timeline-content",
    ".skills-card",
    ".cert-card",
    ".education-card",
    ".contact-card",
    ".mission-card",
];

pub const GLOW_CENTER: (f64, f64) = (50.0, 50.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position as a percentage of the element's box. Degenerate boxes
/// report the center on that axis.
pub fn glow_position(client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
    let x = percent_along(client_x, rect.left, rect.width).unwrap_or(GLOW_CENTER.0);
    let y = percent_along(client_y, rect.top, rect.height).unwrap_or(GLOW_CENTER.1);
    (x, y)
}

fn percent_along(value: f64, start: f64, extent: f64) -> Option<f64> {
    if extent > 0.0 && extent.is_finite() {
        Some((value - start) / extent * 100.0)
    } else {
        None
    }
}

pub fn css_percent(value: f64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 400.0,
        height: 100.0,
    };

    #[test]
    fn pointer_maps_to_box_percentage() {
        assert_eq!(glow_position(100.0, 200.0, CARD), (0.0, 0.0));
        assert_eq!(glow_position(300.0, 250.0, CARD), (50.0, 50.0));
        assert_eq!(glow_position(400.0, 275.0, CARD), (75.0, 75.0));
    }

    #[test]
    fn zero_sized_box_reports_center() {
        let flat = Rect {
            height: 0.0,
            ..CARD
        };
        assert_eq!(glow_position(300.0, 999.0, flat), (50.0, 50.0));
    }

    #[test]
    fn css_percent_formats_like_the_stylesheet_expects() {
        assert_eq!(css_percent(50.0), "50%");
        assert_eq!(css_percent(12.5), "12.5%");
    }
}
