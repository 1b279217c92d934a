use crate::core::conversion::{oklch_to_rgb, rgb_to_linear, rgb_to_oklch};
use crate::core::gamut::{clamp_to_gamut, Gamut, DEFAULT_JND};
use crate::space::{Oklch, Rgba};
use crate::Float;

// APCA thresholds on the Lc scale, for the 0.0.98G-4g revision of the
// algorithm. Lc 90 roughly corresponds to WCAG 7:1 and Lc 60 to 4.5:1.

/// Preferred minimum Lc for body text.
pub const APCA_BODY_TEXT: Float = 90.0;
/// Hard minimum Lc for body text.
pub const APCA_BODY_TEXT_MIN: Float = 75.0;
/// Minimum Lc for content text such as buttons and labels.
pub const APCA_CONTENT_TEXT: Float = 60.0;
/// Minimum Lc for large headline text.
pub const APCA_HEADLINE: Float = 45.0;
/// Minimum Lc for any text that must remain discernible at all.
pub const APCA_FLOOR: Float = 15.0;

/// Compute the WCAG 2.x relative luminance of the color.
///
/// Luminance is the Y of the color's XYZ representation: the linear RGB
/// channels weighted by the second row of the sRGB-to-XYZ matrix. Alpha is
/// ignored.
///
/// ```
/// # use okcolor::{luminance, Rgba};
/// assert_eq!(luminance(&Rgba::BLACK), 0.0);
/// assert!((luminance(&Rgba::WHITE) - 1.0).abs() < 1e-9);
/// ```
pub fn luminance(color: &Rgba) -> Float {
    let linear = rgb_to_linear(*color);
    let weights: [Float; 3] = [0.2126, 0.7152, 0.0722];
    weights[0].mul_add(linear.r, weights[1].mul_add(linear.g, weights[2] * linear.b))
}

/// Compute the WCAG 2.x contrast ratio between the two colors.
///
/// The ratio is symmetric and falls in `1..=21`, with 21 for black against
/// white. WCAG requires 4.5 for normal text and 3 for large text at level AA.
pub fn contrast_ratio(a: &Rgba, b: &Rgba) -> Float {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

// APCA 0.0.98G-4g constants. https://github.com/Myndex/apca-w3
const APCA_EXPONENT: Float = 2.4;
const APCA_COEFFICIENTS: [Float; 3] = [0.2126729, 0.7151522, 0.0721750];
const APCA_BLACK_THRESHOLD: Float = 0.022;
const APCA_BLACK_CLIP: Float = 1.414;
const APCA_DELTA_Y_MIN: Float = 0.0005;
const APCA_BOW_TEXT: Float = 0.57;
const APCA_BOW_BACKGROUND: Float = 0.56;
const APCA_WOB_TEXT: Float = 0.62;
const APCA_WOB_BACKGROUND: Float = 0.65;
const APCA_SCALE: Float = 1.14;
const APCA_CLAMP: Float = 0.1;
const APCA_OFFSET: Float = 0.027;

/// APCA's estimate of a color's light intensity on a typical screen.
fn apca_luminance(color: &Rgba) -> Float {
    let [r, g, b] = [
        Float::from(color.r) / 255.0,
        Float::from(color.g) / 255.0,
        Float::from(color.b) / 255.0,
    ];

    let luminance = APCA_COEFFICIENTS[0].mul_add(
        r.powf(APCA_EXPONENT),
        APCA_COEFFICIENTS[1].mul_add(g.powf(APCA_EXPONENT), APCA_COEFFICIENTS[2] * b.powf(APCA_EXPONENT)),
    );

    // Soft clamp near black, accounting for flare and ambient light.
    if luminance < APCA_BLACK_THRESHOLD {
        luminance + (APCA_BLACK_THRESHOLD - luminance).powf(APCA_BLACK_CLIP)
    } else {
        luminance
    }
}

/// Compute the APCA lightness contrast Lc of text against its background.
///
/// Unlike [`contrast_ratio`], the result is signed and asymmetric: positive
/// for dark text on a light background, negative for light text on a dark
/// background, with magnitudes up to roughly 106 and 108 respectively. See
/// the `APCA_*` constants for the recommended thresholds.
///
/// This implements revision 0.0.98G-4g of the algorithm, which remains a
/// draft; its numbers may change in future revisions.
pub fn apca_contrast(text: &Rgba, background: &Rgba) -> Float {
    let text_luminance = apca_luminance(text);
    let background_luminance = apca_luminance(background);

    if (background_luminance - text_luminance).abs() < APCA_DELTA_Y_MIN {
        return 0.0;
    }

    if text_luminance < background_luminance {
        // Dark text on light background.
        let contrast = APCA_SCALE
            * (background_luminance.powf(APCA_BOW_BACKGROUND)
                - text_luminance.powf(APCA_BOW_TEXT));
        if contrast < APCA_CLAMP {
            0.0
        } else {
            (contrast - APCA_OFFSET) * 100.0
        }
    } else {
        // Light text on dark background.
        let contrast = APCA_SCALE
            * (background_luminance.powf(APCA_WOB_BACKGROUND)
                - text_luminance.powf(APCA_WOB_TEXT));
        if contrast > -APCA_CLAMP {
            0.0
        } else {
            (contrast + APCA_OFFSET) * 100.0
        }
    }
}

/// Options for [`ensure_contrast`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContrastOptions {
    /// Force the adjustment direction: `Some(true)` always lightens the
    /// foreground, `Some(false)` always darkens it. `None` picks the natural
    /// direction away from the background's luminance.
    pub prefer_lighten: Option<bool>,
}

/// Adjust the foreground color until it reaches the target WCAG contrast
/// ratio against the background, changing its Oklch lightness while keeping
/// chroma and hue as close as the gamut allows.
///
/// If the foreground already meets the target it is returned unchanged.
/// Otherwise its lightness is pushed away from the background, lightening
/// when the background is dark and darkening when it is light, unless
/// [`ContrastOptions::prefer_lighten`] overrides the direction. When the
/// target is unreachable in that direction, the opposite direction is tried
/// as well and the candidate with the higher ratio wins, ties favoring the
/// requested direction. The result always keeps the foreground's alpha.
///
/// ```
/// # use okcolor::{contrast_ratio, ensure_contrast, ContrastOptions, Rgba};
/// let gray = Rgba::opaque(150, 150, 150);
/// let fixed = ensure_contrast(&gray, &Rgba::WHITE, 4.5, ContrastOptions::default());
/// assert!(contrast_ratio(&fixed, &Rgba::WHITE) >= 4.5);
/// ```
pub fn ensure_contrast(
    fg: &Rgba,
    bg: &Rgba,
    target: Float,
    options: ContrastOptions,
) -> Rgba {
    if contrast_ratio(fg, bg) >= target {
        return *fg;
    }

    let lighten = options
        .prefer_lighten
        .unwrap_or_else(|| luminance(fg) >= luminance(bg));

    let primary = adjust_lightness(fg, bg, target, lighten);
    if contrast_ratio(&primary, bg) >= target {
        return primary;
    }

    // The requested direction cannot reach the target. Try the other one and
    // keep whichever candidate comes closer, preferring the requested
    // direction on a tie.
    let secondary = adjust_lightness(fg, bg, target, !lighten);
    if contrast_ratio(&secondary, bg) > contrast_ratio(&primary, bg) {
        secondary
    } else {
        primary
    }
}

/// Search the Oklch lightness axis of the foreground for the least adjustment
/// that meets the target ratio. Every candidate is gamut-mapped before
/// testing, so chroma may shrink near the extremes. Falls back to the extreme
/// lightness when the target is out of reach.
fn adjust_lightness(fg: &Rgba, bg: &Rgba, target: Float, lighten: bool) -> Rgba {
    let oklch = rgb_to_oklch(*fg);

    let candidate = |l: Float| -> Rgba {
        let color = Oklch {
            l,
            c: oklch.c,
            h: oklch.h,
            alpha: oklch.alpha,
        };
        oklch_to_rgb(clamp_to_gamut(color, Gamut::Srgb, DEFAULT_JND))
    };

    let (mut lo, mut hi) = if lighten {
        (oklch.l, 1.0)
    } else {
        (0.0, oklch.l)
    };

    let extreme = candidate(if lighten { 1.0 } else { 0.0 });
    let mut best = extreme;

    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        let cand = candidate(mid);
        let passes = contrast_ratio(&cand, bg) >= target;

        if lighten {
            if passes {
                best = cand;
                hi = mid;
            } else {
                lo = mid;
            }
        } else if passes {
            best = cand;
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if contrast_ratio(&best, bg) >= target {
        best
    } else {
        extreme
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_luminance_of_primaries() {
        assert_eq!(luminance(&Rgba::BLACK), 0.0);
        assert_abs_diff_eq!(luminance(&Rgba::WHITE), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            luminance(&Rgba::opaque(255, 0, 0)),
            0.2126,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            luminance(&Rgba::opaque(0, 255, 0)),
            0.7152,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            luminance(&Rgba::opaque(0, 0, 255)),
            0.0722,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        assert_abs_diff_eq!(
            contrast_ratio(&Rgba::BLACK, &Rgba::WHITE),
            21.0,
            epsilon = 1e-9
        );

        let gray = Rgba::opaque(119, 119, 119);
        assert_eq!(contrast_ratio(&gray, &gray), 1.0);
    }

    #[test]
    fn test_contrast_ratio_symmetric() {
        let a = Rgba::opaque(49, 120, 234);
        let b = Rgba::opaque(255, 202, 0);
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn test_apca_polarity() {
        let black_on_white = apca_contrast(&Rgba::BLACK, &Rgba::WHITE);
        assert!(black_on_white > 100.0, "got {}", black_on_white);

        let white_on_black = apca_contrast(&Rgba::WHITE, &Rgba::BLACK);
        assert!(white_on_black < -100.0, "got {}", white_on_black);

        // Reversing polarity changes the magnitude, not just the sign.
        assert_ne!(black_on_white, -white_on_black);
    }

    #[test]
    fn test_apca_low_contrast_clamps_to_zero() {
        let a = Rgba::opaque(128, 128, 128);
        let b = Rgba::opaque(130, 130, 130);
        assert_eq!(apca_contrast(&a, &b), 0.0);
        assert_eq!(apca_contrast(&a, &a), 0.0);
    }

    #[test]
    fn test_ensure_contrast_already_met() {
        let fg = Rgba::BLACK;
        assert_eq!(
            ensure_contrast(&fg, &Rgba::WHITE, 4.5, ContrastOptions::default()),
            fg
        );
    }

    #[test]
    fn test_ensure_contrast_darkens_against_white() {
        let gray = Rgba::opaque(150, 150, 150);
        assert!(contrast_ratio(&gray, &Rgba::WHITE) < 4.5);

        let fixed = ensure_contrast(&gray, &Rgba::WHITE, 4.5, ContrastOptions::default());
        assert!(contrast_ratio(&fixed, &Rgba::WHITE) >= 4.5);
        assert!(luminance(&fixed) < luminance(&gray));
    }

    #[test]
    fn test_ensure_contrast_lightens_against_black() {
        let gray = Rgba::opaque(80, 80, 80);
        let fixed = ensure_contrast(&gray, &Rgba::BLACK, 4.5, ContrastOptions::default());
        assert!(contrast_ratio(&fixed, &Rgba::BLACK) >= 4.5);
        assert!(luminance(&fixed) > luminance(&gray));
    }

    #[test]
    fn test_ensure_contrast_unreachable_falls_back() {
        // Nothing reaches 21:1 against a mid gray; the search must still
        // return the best available candidate rather than fail.
        let bg = Rgba::opaque(128, 128, 128);
        let fg = Rgba::opaque(100, 100, 100);
        let fixed = ensure_contrast(&fg, &bg, 21.0, ContrastOptions::default());

        let best_dark = contrast_ratio(&Rgba::BLACK, &bg);
        let best_light = contrast_ratio(&Rgba::WHITE, &bg);
        let achieved = contrast_ratio(&fixed, &bg);
        assert!(achieved >= best_dark.max(best_light) - 1e-9);
    }

    #[test]
    fn test_ensure_contrast_prefer_lighten_override() {
        let gray = Rgba::opaque(150, 150, 150);
        let options = ContrastOptions {
            prefer_lighten: Some(true),
        };
        // Lightening cannot reach 4.5 against white, so the darkened
        // fallback must win anyway.
        let fixed = ensure_contrast(&gray, &Rgba::WHITE, 4.5, options);
        assert!(contrast_ratio(&fixed, &Rgba::WHITE) >= 4.5);

        // Against a mid-dark background, the override does take effect.
        let bg = Rgba::opaque(60, 60, 60);
        let fg = Rgba::opaque(90, 90, 90);
        let lightened = ensure_contrast(
            &fg,
            &bg,
            3.0,
            ContrastOptions {
                prefer_lighten: Some(true),
            },
        );
        assert!(luminance(&lightened) > luminance(&fg));
        assert!(contrast_ratio(&lightened, &bg) >= 3.0);
    }

    #[test]
    fn test_ensure_contrast_preserves_alpha() {
        let fg = Rgba::new(150, 150, 150, 0.5);
        let fixed = ensure_contrast(&fg, &Rgba::WHITE, 4.5, ContrastOptions::default());
        assert_eq!(fixed.alpha, 0.5);
    }
}
