//! Initial size and position of newly opened windows

use crate::config::DesktopConfig;
use crate::math::{Size, Vec2};
use crate::tool::ToolKind;
use crate::viewport::Viewport;

/// Source of the small random offset applied to new windows so that
/// consecutive opens of the same tool do not stack pixel-perfectly
pub trait JitterSource {
    /// Offset with each component in `[-amplitude, amplitude]`
    fn jitter(&mut self, amplitude: f32) -> Vec2;
}

/// Jitter drawn from the platform RNG
///
/// If the RNG is unavailable the offset is zero; opening a window never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&mut self, amplitude: f32) -> Vec2 {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_err() {
            return Vec2::ZERO;
        }
        let x = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let y = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Vec2::new(spread(x, amplitude), spread(y, amplitude))
    }
}

/// Map a uniform `u32` onto `[-amplitude, amplitude]`
fn spread(raw: u32, amplitude: f32) -> f32 {
    let unit = raw as f64 / u32::MAX as f64;
    ((unit * 2.0 - 1.0) * amplitude as f64) as f32
}

/// Fixed offset, for deterministic tests and replays
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedJitter(pub Vec2);

impl JitterSource for FixedJitter {
    fn jitter(&mut self, amplitude: f32) -> Vec2 {
        let a = amplitude.abs();
        Vec2::new(self.0.x.clamp(-a, a), self.0.y.clamp(-a, a))
    }
}

/// Default size of `kind`, capped to a fraction of the viewport
pub fn default_size(kind: ToolKind, viewport: &Viewport, config: &DesktopConfig) -> Size {
    let cap = viewport.size.fraction(
        config.default_max_width_fraction,
        config.default_max_height_fraction,
    );
    kind.spec().default_size.at_most(cap)
}

/// Centered position plus jitter, kept clear of the left edge and the header bar
pub fn open_position(size: Size, jitter: Vec2, viewport: &Viewport, config: &DesktopConfig) -> Vec2 {
    let centered = viewport.centered_origin(size) + jitter;
    centered.max(Vec2::new(config.open_min_left, config.open_min_top))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_on_large_viewport() {
        let size = default_size(ToolKind::Ruler, &Viewport::new(1920.0, 1080.0), &DesktopConfig::default());
        assert!((size.width - 500.0).abs() < 0.001);
        assert!((size.height - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_default_size_capped_on_small_viewport() {
        let size = default_size(ToolKind::NumberLine, &Viewport::new(400.0, 300.0), &DesktopConfig::default());
        assert!((size.width - 380.0).abs() < 0.001);
        assert!((size.height - 255.0).abs() < 0.001);
    }

    #[test]
    fn test_open_position_centered() {
        let pos = open_position(
            Size::new(500.0, 120.0),
            Vec2::new(7.0, -3.0),
            &Viewport::new(1920.0, 1080.0),
            &DesktopConfig::default(),
        );
        assert!((pos.x - 717.0).abs() < 0.001);
        assert!((pos.y - 477.0).abs() < 0.001);
    }

    #[test]
    fn test_open_position_respects_minimums() {
        let pos = open_position(
            Size::new(380.0, 255.0),
            Vec2::new(-20.0, -20.0),
            &Viewport::new(400.0, 300.0),
            &DesktopConfig::default(),
        );
        assert!((pos.x - 10.0).abs() < 0.001);
        assert!((pos.y - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_random_jitter_within_amplitude() {
        let mut source = RandomJitter;
        for _ in 0..200 {
            let j = source.jitter(20.0);
            assert!(j.x >= -20.0 && j.x <= 20.0);
            assert!(j.y >= -20.0 && j.y <= 20.0);
        }
    }

    #[test]
    fn test_fixed_jitter_clamped_to_amplitude() {
        let mut source = FixedJitter(Vec2::new(100.0, -5.0));
        let j = source.jitter(20.0);
        assert!((j.x - 20.0).abs() < 0.001);
        assert!((j.y - (-5.0)).abs() < 0.001);
    }

    #[test]
    fn test_spread_endpoints() {
        assert!((spread(0, 20.0) - (-20.0)).abs() < 0.001);
        assert!((spread(u32::MAX, 20.0) - 20.0).abs() < 0.001);
    }
}
