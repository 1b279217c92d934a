use crate::core::conversion::{oklch_to_linear_p3_coords, oklch_to_linear_srgb_coords};
use crate::space::Oklch;
use crate::Float;

/// The tolerance on linear channels when testing gamut membership. Floating
/// point conversions land a hair outside the boundary for colors that are
/// exactly on it.
const BOUNDARY_EPSILON: Float = 1e-4;

/// The default just-noticeable-difference for chroma bisection, in Oklch
/// chroma units.
pub const DEFAULT_JND: Float = 0.02;

/// A target gamut for membership tests and gamut mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gamut {
    /// The sRGB gamut.
    Srgb,
    /// The Display P3 gamut, a superset of sRGB.
    DisplayP3,
}

impl Gamut {
    /// Project the color onto this gamut's linear RGB coordinates.
    fn project(&self, color: &Oklch) -> [Float; 3] {
        let coords = [color.l, color.c, color.h];
        match self {
            Gamut::Srgb => oklch_to_linear_srgb_coords(&coords),
            Gamut::DisplayP3 => oklch_to_linear_p3_coords(&coords),
        }
    }
}

impl std::fmt::Display for Gamut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Gamut::Srgb => "sRGB",
            Gamut::DisplayP3 => "Display P3",
        })
    }
}

/// Options for [`map_to_gamut`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GamutOptions {
    /// The just-noticeable-difference bound on the chroma bisection, in Oklch
    /// chroma units. Smaller values converge closer to the gamut boundary.
    pub jnd: Float,
}

impl Default for GamutOptions {
    fn default() -> Self {
        Self { jnd: DEFAULT_JND }
    }
}

/// Determine whether the color fits into the given gamut.
///
/// A color is in gamut when its lightness is within `0..=1` and its linear
/// RGB projection keeps every channel within the unit range, up to a small
/// boundary tolerance.
///
/// ```
/// # use okcolor::{in_gamut, Gamut, Oklch};
/// assert!(in_gamut(Oklch::new(0.6, 0.1, 120.0, 1.0), Gamut::Srgb));
/// assert!(!in_gamut(Oklch::new(0.6, 0.35, 120.0, 1.0), Gamut::Srgb));
/// ```
pub fn in_gamut(color: Oklch, gamut: Gamut) -> bool {
    if !(0.0..=1.0).contains(&color.l) {
        return false;
    }

    gamut
        .project(&color)
        .iter()
        .all(|&channel| (-BOUNDARY_EPSILON..=1.0 + BOUNDARY_EPSILON).contains(&channel))
}

/// Map the color into the given gamut while preserving its lightness and hue.
///
/// Out-of-range lightness short-circuits to the black or white anchor of the
/// gamut. In-gamut colors are returned unchanged. Otherwise chroma is reduced
/// by bisection until the in-gamut lower bound and the out-of-gamut upper
/// bound are within `jnd` of each other, and the lower bound is returned. The
/// result is always in gamut, and the function is idempotent up to the
/// achromatic hue collapse of the conversion pipeline.
pub fn clamp_to_gamut(color: Oklch, gamut: Gamut, jnd: Float) -> Oklch {
    if color.l < 0.0 {
        return Oklch {
            l: 0.0,
            c: 0.0,
            h: color.h,
            alpha: color.alpha,
        };
    }
    if color.l > 1.0 {
        return Oklch {
            l: 1.0,
            c: 0.0,
            h: color.h,
            alpha: color.alpha,
        };
    }
    if in_gamut(color, gamut) {
        return color;
    }

    let jnd = jnd.max(Float::EPSILON);
    let mut lo = 0.0;
    let mut hi = color.c;

    // Chroma monotonically increases out-of-gamut risk at fixed lightness
    // and hue, which is what makes bisection valid here.
    while hi - lo >= jnd {
        let mid = (lo + hi) / 2.0;
        if in_gamut(Oklch { c: mid, ..color }, gamut) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Oklch { c: lo, ..color }
}

/// Map the color into the given gamut, with options. See [`clamp_to_gamut`].
pub fn map_to_gamut(color: Oklch, gamut: Gamut, options: GamutOptions) -> Oklch {
    clamp_to_gamut(color, gamut, options.jnd)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(Oklch::new(0.5, 0.0, 0.0, 1.0), Gamut::Srgb));
        assert!(in_gamut(Oklch::new(1.0, 0.0, 0.0, 1.0), Gamut::Srgb));
        assert!(in_gamut(Oklch::new(0.6, 0.1, 120.0, 1.0), Gamut::Srgb));
        assert!(!in_gamut(Oklch::new(0.6, 0.35, 120.0, 1.0), Gamut::Srgb));
    }

    #[test]
    fn test_lightness_forces_achromatic_boundary() {
        let black = clamp_to_gamut(
            Oklch {
                l: -0.5,
                c: 0.3,
                h: 180.0,
                alpha: 1.0,
            },
            Gamut::Srgb,
            DEFAULT_JND,
        );
        assert_eq!(black, Oklch::new(0.0, 0.0, 180.0, 1.0));

        let white = clamp_to_gamut(
            Oklch {
                l: 1.5,
                c: 0.3,
                h: 180.0,
                alpha: 1.0,
            },
            Gamut::Srgb,
            DEFAULT_JND,
        );
        assert_eq!(white, Oklch::new(1.0, 0.0, 180.0, 1.0));
    }

    #[test]
    fn test_in_gamut_input_unchanged() {
        let color = Oklch::new(0.6, 0.1, 120.0, 0.5);
        assert_eq!(clamp_to_gamut(color, Gamut::Srgb, DEFAULT_JND), color);
    }

    #[test]
    fn test_chroma_reduction() {
        let color = Oklch::new(0.9, 0.3, 180.0, 1.0);
        assert!(!in_gamut(color, Gamut::Srgb));

        let mapped = clamp_to_gamut(color, Gamut::Srgb, DEFAULT_JND);
        assert!(mapped.c < color.c);
        assert_eq!(mapped.l, color.l);
        assert_eq!(mapped.h, color.h);
        assert!(in_gamut(mapped, Gamut::Srgb));
    }

    #[test]
    fn test_idempotent() {
        let mapped = clamp_to_gamut(Oklch::new(0.7, 0.4, 30.0, 1.0), Gamut::Srgb, DEFAULT_JND);
        assert_eq!(clamp_to_gamut(mapped, Gamut::Srgb, DEFAULT_JND), mapped);
    }

    #[test]
    fn test_smaller_jnd_converges_closer() {
        let color = Oklch::new(0.7, 0.4, 30.0, 1.0);
        let coarse = clamp_to_gamut(color, Gamut::Srgb, 0.05);
        let fine = clamp_to_gamut(color, Gamut::Srgb, 1e-6);
        assert!(fine.c >= coarse.c);
        assert!(in_gamut(fine, Gamut::Srgb));
    }

    #[test]
    fn test_map_to_gamut_defaults() {
        let color = Oklch::new(0.7, 0.4, 30.0, 1.0);
        assert_eq!(
            map_to_gamut(color, Gamut::Srgb, GamutOptions::default()),
            clamp_to_gamut(color, Gamut::Srgb, DEFAULT_JND)
        );
    }

    #[test]
    fn test_p3_wider_than_srgb() {
        // A saturated green that sRGB cannot reach but Display P3 can.
        let color = Oklch::new(0.84, 0.3, 145.0, 1.0);
        assert!(!in_gamut(color, Gamut::Srgb));

        let srgb = clamp_to_gamut(color, Gamut::Srgb, 1e-4);
        let p3 = clamp_to_gamut(color, Gamut::DisplayP3, 1e-4);
        assert!(p3.c > srgb.c);
    }
}
