use crate::Float;

/// The strategy for interpolating between two hues.
///
/// Hues are angles, so two hues always bound two arcs on the circle, and an
/// interpolation must pick one. These are the four strategies of CSS Color 4;
/// [`Color::mix`](crate::Color::mix) uses [`HueArc::Shorter`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HueArc {
    /// Take the shorter arc between the two hues.
    #[default]
    Shorter,
    /// Take the longer arc between the two hues.
    Longer,
    /// Keep hues increasing, wrapping the second hue forward if necessary.
    Increasing,
    /// Keep hues decreasing, wrapping the first hue forward if necessary.
    Decreasing,
}

/// Adjust the two hues so that linearly interpolating between them traverses
/// the arc the strategy picks. Inputs must already be normalized to `0..360`;
/// one of the outputs may exceed that range, which is fine for interpolation
/// since the hue is re-normalized on construction of the result.
pub(crate) fn adjust_hues(arc: HueArc, h1: Float, h2: Float) -> [Float; 2] {
    match arc {
        HueArc::Shorter => {
            if h2 - h1 > 180.0 {
                [h1 + 360.0, h2]
            } else if h2 - h1 < -180.0 {
                [h1, h2 + 360.0]
            } else {
                [h1, h2]
            }
        }
        HueArc::Longer => {
            if (0.0..=180.0).contains(&(h2 - h1)) {
                [h1 + 360.0, h2]
            } else if (-180.0..=0.0).contains(&(h2 - h1)) {
                [h1, h2 + 360.0]
            } else {
                [h1, h2]
            }
        }
        HueArc::Increasing => {
            if h2 < h1 {
                [h1, h2 + 360.0]
            } else {
                [h1, h2]
            }
        }
        HueArc::Decreasing => {
            if h1 < h2 {
                [h1 + 360.0, h2]
            } else {
                [h1, h2]
            }
        }
    }
}

/// Linearly interpolate between the two values.
#[inline]
pub(crate) fn lerp(fraction: Float, a: Float, b: Float) -> Float {
    (b - a).mul_add(fraction, a)
}

/// Compute the perceptual distance ΔE-OK between two Oklab coordinate
/// triples, which is simply their Euclidean distance.
pub(crate) fn delta_e_ok(a: &[Float; 3], b: &[Float; 3]) -> Float {
    let dl = a[0] - b[0];
    let da = a[1] - b[1];
    let db = a[2] - b[2];
    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shorter_arc_crosses_zero() {
        let [h1, h2] = adjust_hues(HueArc::Shorter, 350.0, 10.0);
        assert_eq!([h1, h2], [350.0, 370.0]);
        assert_eq!(lerp(0.5, h1, h2).rem_euclid(360.0), 0.0);
    }

    #[test]
    fn test_shorter_arc_plain() {
        assert_eq!(adjust_hues(HueArc::Shorter, 30.0, 150.0), [30.0, 150.0]);
        assert_eq!(adjust_hues(HueArc::Shorter, 150.0, 30.0), [150.0, 30.0]);
    }

    #[test]
    fn test_longer_arc() {
        assert_eq!(adjust_hues(HueArc::Longer, 30.0, 150.0), [390.0, 150.0]);
        assert_eq!(adjust_hues(HueArc::Longer, 150.0, 30.0), [150.0, 390.0]);
        // Already the longer arc, nothing to adjust.
        assert_eq!(adjust_hues(HueArc::Longer, 350.0, 10.0), [350.0, 10.0]);
    }

    #[test]
    fn test_directional_arcs() {
        assert_eq!(adjust_hues(HueArc::Increasing, 300.0, 60.0), [300.0, 420.0]);
        assert_eq!(adjust_hues(HueArc::Increasing, 60.0, 300.0), [60.0, 300.0]);
        assert_eq!(adjust_hues(HueArc::Decreasing, 60.0, 300.0), [420.0, 300.0]);
        assert_eq!(adjust_hues(HueArc::Decreasing, 300.0, 60.0), [300.0, 60.0]);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 2.0, 8.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 8.0), 8.0);
        assert_eq!(lerp(0.5, 2.0, 8.0), 5.0);
    }

    #[test]
    fn test_delta_e_ok() {
        let a = [0.5, 0.1, -0.1];
        assert_eq!(delta_e_ok(&a, &a), 0.0);
        assert_eq!(delta_e_ok(&[0.0, 0.0, 0.0], &[0.0, 0.3, 0.4]), 0.5);
        assert_eq!(
            delta_e_ok(&a, &[0.6, 0.1, -0.1]),
            delta_e_ok(&[0.6, 0.1, -0.1], &a)
        );
    }
}
