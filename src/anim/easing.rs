/// Easing curves used by the portfolio's animations
///
/// Only the curves the page actually uses are implemented: power2 in/out
/// for the lightbox crossfade, power3 out for the reveal animations,
/// power4 in-out for the preloader slide, back-out for the split-text
/// character entrance, and the exponential curve driving smooth scroll.
///
/// All functions take and return normalized progress in [0, 1] (back-out
/// intentionally overshoots above 1 near the end).

/// Clamp a progress value into [0, 1]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Accelerating from zero (quadratic)
pub fn power2_in(t: f32) -> f32 {
    let t = clamp01(t);
    t * t
}

/// Decelerating to one (quadratic)
pub fn power2_out(t: f32) -> f32 {
    let t = clamp01(t);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Decelerating to one (cubic)
pub fn power3_out(t: f32) -> f32 {
    let t = clamp01(t);
    1.0 - (1.0 - t).powi(3)
}

/// Slow-fast-slow (quartic)
pub fn power4_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Overshooting deceleration, overshoot amount 1.7 (the character
/// entrance of the split-text reveal)
pub fn back_out(t: f32) -> f32 {
    const C1: f32 = 1.7;
    const C3: f32 = C1 + 1.0;

    let t = clamp01(t);
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0) * (t - 1.0)
}

/// The smooth-scroll curve: `min(1, 1.001 - 2^(-10t))`. Reaches ~1
/// quickly and flattens, which is what gives the scroll its glide.
pub fn expo_scroll(t: f32) -> f32 {
    let t = clamp01(t);
    (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_endpoints() {
        for ease in [
            power2_in,
            power2_out,
            power3_out,
            power4_in_out,
            back_out,
            expo_scroll,
        ] {
            assert!(ease(0.0).abs() < 2e-3, "ease(0) should be ~0");
            assert!((ease(1.0) - 1.0).abs() < EPS, "ease(1) should be ~1");
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(power2_in(-0.5), 0.0);
        assert!((power2_out(1.5) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_power2_shapes() {
        // "in" starts slow, "out" starts fast
        assert!(power2_in(0.25) < 0.25);
        assert!(power2_out(0.25) > 0.25);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (0..100)
            .map(|i| back_out(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_expo_scroll_is_monotonic() {
        let mut prev = expo_scroll(0.0);
        for i in 1..=50 {
            let next = expo_scroll(i as f32 / 50.0);
            assert!(next >= prev);
            prev = next;
        }
    }
}
