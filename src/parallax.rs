use crate::config::EffectConfig;

pub const HERO_SELECTOR: &str = ".hero";

/// Pointer-following offset for the hero, eased toward its target each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    smoothing: f64,
    range_px: f64,
    target: (f64, f64),
    current: (f64, f64),
}

impl Parallax {
    pub fn new(config: &EffectConfig) -> Self {
        Self {
            smoothing: config.parallax_smoothing,
            range_px: config.parallax_range_px,
            target: (0.0, 0.0),
            current: (0.0, 0.0),
        }
    }

    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    pub fn current(&self) -> (f64, f64) {
        self.current
    }

    /// Re-targets from a pointer position inside a viewport of the given size.
    pub fn point_at(&mut self, client_x: f64, client_y: f64, viewport: (f64, f64)) {
        let (width, height) = viewport;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target = (
            (client_x / width - 0.5) * self.range_px,
            (client_y / height - 0.5) * self.range_px,
        );
    }

    /// Advances one animation frame and returns the new offset.
    pub fn step(&mut self) -> (f64, f64) {
        self.current.0 += (self.target.0 - self.current.0) * self.smoothing;
        self.current.1 += (self.target.1 - self.current.1) * self.smoothing;
        self.current
    }
}

pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_centered_target() {
        let mut parallax = Parallax::new(&EffectConfig::default());
        parallax.point_at(0.0, 1000.0, (1000.0, 1000.0));
        assert_eq!(parallax.target(), (-20.0, 20.0));

        parallax.point_at(500.0, 500.0, (1000.0, 1000.0));
        assert_eq!(parallax.target(), (0.0, 0.0));
    }

    #[test]
    fn step_moves_a_fixed_fraction_toward_target() {
        let mut parallax = Parallax::new(&EffectConfig::default());
        parallax.point_at(1000.0, 500.0, (1000.0, 1000.0));

        let (x, y) = parallax.step();
        assert!((x - 1.6).abs() < 1e-9);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn offset_converges_without_overshoot() {
        let mut parallax = Parallax::new(&EffectConfig::default());
        parallax.point_at(1000.0, 0.0, (1000.0, 1000.0));

        let mut previous = 0.0;
        for _ in 0..200 {
            let (x, _) = parallax.step();
            assert!(x >= previous && x <= 20.0 + 1e-9);
            previous = x;
        }
        assert!((parallax.current().0 - 20.0).abs() < 0.01);
        assert!((parallax.current().1 + 20.0).abs() < 0.01);
    }

    #[test]
    fn empty_viewport_keeps_previous_target() {
        let mut parallax = Parallax::new(&EffectConfig::default());
        parallax.point_at(1000.0, 0.0, (1000.0, 1000.0));
        parallax.point_at(10.0, 10.0, (0.0, 0.0));
        assert_eq!(parallax.target(), (20.0, -20.0));
    }
}
