use std::hash::{Hash, Hasher};

use crate::core::{
    adjust_hues, apca_contrast, clamp_to_gamut, contrast_ratio, delta_e_ok, hsl_to_oklch,
    in_gamut, lerp, luminance, map_to_gamut, oklab_to_oklch, oklch_to_hsl, oklch_to_oklab,
    oklch_to_p3, oklch_to_rgb, oklch_to_xyz, p3_to_oklch, rgb_to_oklch, to_eq_bits, xyz_to_oklch,
    Gamut, GamutOptions, HueArc, DEFAULT_JND,
};
use crate::space::{Hsla, Oklab, Oklch, Rgba, Xyz, P3};
use crate::Float;

/// Create a new color from 8-bit sRGB coordinates.
///
/// Like [`Color::srgb`], this macro creates a new color from 8-bit red,
/// green, and blue values, but it also accepts any integer expression for
/// the channels.
///
/// ```
/// # use okcolor::rgb;
/// let tangerine = rgb!(0xff, 0x93, 0x00);
/// assert_eq!(tangerine.to_rgba().g, 0x93);
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr $(,)?) => {
        $crate::Color::srgb($r as u8, $g as u8, $b as u8)
    };
}

/// A color in any of the supported color spaces.
///
/// [`Color::new`] accepts any value type through this union, so that generic
/// call sites need not pick a specific `From` impl.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// A gamma-encoded sRGB color.
    Rgba(Rgba),
    /// An HSL color.
    Hsla(Hsla),
    /// An Oklch color.
    Oklch(Oklch),
    /// An Oklab color.
    Oklab(Oklab),
    /// An XYZ color with the D65 white point.
    Xyz(Xyz),
    /// A Display P3 color.
    P3(P3),
}

impl From<Rgba> for ColorInput {
    fn from(color: Rgba) -> Self {
        ColorInput::Rgba(color)
    }
}

impl From<Hsla> for ColorInput {
    fn from(color: Hsla) -> Self {
        ColorInput::Hsla(color)
    }
}

impl From<Oklch> for ColorInput {
    fn from(color: Oklch) -> Self {
        ColorInput::Oklch(color)
    }
}

impl From<Oklab> for ColorInput {
    fn from(color: Oklab) -> Self {
        ColorInput::Oklab(color)
    }
}

impl From<Xyz> for ColorInput {
    fn from(color: Xyz) -> Self {
        ColorInput::Xyz(color)
    }
}

impl From<P3> for ColorInput {
    fn from(color: P3) -> Self {
        ColorInput::P3(color)
    }
}

/// The color space a [`mix`](Color::mix) interpolates in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MixSpace {
    /// Interpolate Oklch components, which mixes perceptually.
    #[default]
    Oklch,
    /// Interpolate gamma-encoded sRGB channels, which matches naive
    /// channel-wise blending.
    Rgb,
}

/// Options for [`Color::mix`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MixOptions {
    /// The fraction of the other color, clamped to `0..=1`. Zero keeps this
    /// color, one yields the other.
    pub ratio: Float,
    /// The interpolation space.
    pub space: MixSpace,
    /// The hue arc, for [`MixSpace::Oklch`].
    pub hue: HueArc,
}

impl Default for MixOptions {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            space: MixSpace::default(),
            hue: HueArc::default(),
        }
    }
}

/// An immutable color.
///
/// Every color holds its canonical Oklch representation and converts on
/// demand. All manipulation methods return a new color and leave the receiver
/// untouched.
///
/// ```
/// # use okcolor::Color;
/// let blue = Color::srgb(49, 120, 234);
/// let lighter = blue.lighten(0.1);
/// assert!(lighter.to_oklch().l > blue.to_oklch().l);
/// assert_eq!(blue, Color::srgb(49, 120, 234));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Color {
    oklch: Oklch,
}

impl Color {
    /// Create a new color from any supported value type.
    ///
    /// ```
    /// # use okcolor::{Color, Hsla, Rgba};
    /// let a = Color::new(Rgba::opaque(255, 0, 0));
    /// let b = Color::new(Hsla::new(0.0, 1.0, 0.5, 1.0));
    /// assert_eq!(a, b);
    /// ```
    pub fn new(color: impl Into<ColorInput>) -> Self {
        let oklch = match color.into() {
            ColorInput::Rgba(c) => rgb_to_oklch(c),
            ColorInput::Hsla(c) => hsl_to_oklch(c),
            ColorInput::Oklch(c) => c,
            ColorInput::Oklab(c) => oklab_to_oklch(c),
            ColorInput::Xyz(c) => xyz_to_oklch(c),
            ColorInput::P3(c) => p3_to_oklch(c),
        };
        Self { oklch }
    }

    /// Create a new opaque color from 8-bit sRGB coordinates.
    #[inline]
    pub fn srgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(Rgba::opaque(r, g, b))
    }

    /// Create a new opaque color from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// # use okcolor::Color;
    /// assert_eq!(Color::from_24bit(0xff9300), Color::srgb(0xff, 0x93, 0x00));
    /// ```
    #[inline]
    pub fn from_24bit(value: u32) -> Self {
        Self::srgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Create a new opaque color from Oklch coordinates.
    #[inline]
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(Oklch::new(l, c, h, 1.0))
    }

    // ----------------------------------------------------------------------
    // Accessors

    /// Access this color as gamma-encoded sRGB.
    ///
    /// Colors outside the sRGB gamut clamp at the 8-bit boundary; use
    /// [`map_to_gamut`](Color::map_to_gamut) first for a perceptually closer
    /// result.
    #[inline]
    pub fn to_rgba(&self) -> Rgba {
        oklch_to_rgb(self.oklch)
    }

    /// Access this color as HSL.
    #[inline]
    pub fn to_hsla(&self) -> Hsla {
        oklch_to_hsl(self.oklch)
    }

    /// Access this color's canonical Oklch representation.
    #[inline]
    pub fn to_oklch(&self) -> Oklch {
        self.oklch
    }

    /// Access this color as Oklab.
    #[inline]
    pub fn to_oklab(&self) -> Oklab {
        oklch_to_oklab(self.oklch)
    }

    /// Access this color as XYZ with the D65 white point.
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        oklch_to_xyz(self.oklch)
    }

    /// Access this color as Display P3.
    #[inline]
    pub fn to_p3(&self) -> P3 {
        oklch_to_p3(self.oklch)
    }

    /// Access this color's alpha.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.oklch.alpha
    }

    // ----------------------------------------------------------------------
    // Manipulation

    /// Lighten this color by adding the amount to its Oklch lightness. The
    /// result clamps to `0..=1`; a negative amount darkens.
    pub fn lighten(&self, amount: Float) -> Self {
        Self {
            oklch: Oklch::new(
                self.oklch.l + amount,
                self.oklch.c,
                self.oklch.h,
                self.oklch.alpha,
            ),
        }
    }

    /// Darken this color by subtracting the amount from its Oklch lightness.
    #[inline]
    pub fn darken(&self, amount: Float) -> Self {
        self.lighten(-amount)
    }

    /// Saturate this color by adding the amount to its Oklch chroma, then
    /// mapping the result back into the sRGB gamut. A negative amount
    /// desaturates.
    pub fn saturate(&self, amount: Float) -> Self {
        let candidate = Oklch::new(
            self.oklch.l,
            self.oklch.c + amount,
            self.oklch.h,
            self.oklch.alpha,
        );
        Self {
            oklch: clamp_to_gamut(candidate, Gamut::Srgb, DEFAULT_JND),
        }
    }

    /// Desaturate this color by subtracting the amount from its Oklch chroma.
    #[inline]
    pub fn desaturate(&self, amount: Float) -> Self {
        self.saturate(-amount)
    }

    /// Rotate this color's hue by the given number of degrees, in either
    /// direction.
    pub fn rotate(&self, degrees: Float) -> Self {
        Self {
            oklch: Oklch::new(
                self.oklch.l,
                self.oklch.c,
                self.oklch.h + degrees,
                self.oklch.alpha,
            ),
        }
    }

    /// Rotate this color's hue by 180 degrees.
    #[inline]
    pub fn complement(&self) -> Self {
        self.rotate(180.0)
    }

    /// Drop this color's chroma to zero, yielding the gray of equal Oklch
    /// lightness. Hue and alpha are unchanged.
    pub fn grayscale(&self) -> Self {
        Self {
            oklch: Oklch {
                c: 0.0,
                ..self.oklch
            },
        }
    }

    /// Invert this color's gamma-encoded sRGB channels. White inverts to
    /// black, red to cyan. Alpha is unchanged.
    pub fn invert(&self) -> Self {
        let rgba = self.to_rgba();
        Self::new(Rgba::new(
            255 - rgba.r,
            255 - rgba.g,
            255 - rgba.b,
            rgba.alpha,
        ))
    }

    /// Flip this color's Oklch lightness around the midpoint, keeping chroma
    /// and hue.
    pub fn invert_lightness(&self) -> Self {
        Self {
            oklch: Oklch::new(
                1.0 - self.oklch.l,
                self.oklch.c,
                self.oklch.h,
                self.oklch.alpha,
            ),
        }
    }

    /// Mix this color with another one.
    ///
    /// The default options blend the two colors evenly in Oklch with the
    /// shorter hue arc, which is also what CSS `color-mix` in `oklch` does.
    ///
    /// ```
    /// # use okcolor::{Color, MixOptions};
    /// let red = Color::srgb(255, 0, 0);
    /// let same = red.mix(&Color::srgb(0, 0, 255), MixOptions { ratio: 0.0, ..Default::default() });
    /// assert_eq!(same, red);
    /// ```
    pub fn mix(&self, other: &Self, options: MixOptions) -> Self {
        let ratio = options.ratio.clamp(0.0, 1.0);

        // The boundary ratios return an endpoint as is. Interpolating would
        // disturb the receiver in RGB mode, which rounds to 8-bit channels.
        if ratio == 0.0 {
            return *self;
        }
        if ratio == 1.0 {
            return *other;
        }

        match options.space {
            MixSpace::Oklch => {
                let (a, b) = (self.oklch, other.oklch);
                let [h1, h2] = adjust_hues(options.hue, a.h, b.h);
                Self {
                    oklch: Oklch::new(
                        lerp(ratio, a.l, b.l),
                        lerp(ratio, a.c, b.c),
                        lerp(ratio, h1, h2),
                        lerp(ratio, a.alpha, b.alpha),
                    ),
                }
            }
            MixSpace::Rgb => {
                let a = self.to_rgba();
                let b = other.to_rgba();
                Self::new(Rgba::new(
                    lerp(ratio, Float::from(a.r), Float::from(b.r)).round() as u8,
                    lerp(ratio, Float::from(a.g), Float::from(b.g)).round() as u8,
                    lerp(ratio, Float::from(a.b), Float::from(b.b)).round() as u8,
                    lerp(ratio, a.alpha, b.alpha),
                ))
            }
        }
    }

    // ----------------------------------------------------------------------
    // Alpha

    /// Replace this color's alpha.
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            oklch: Oklch::new(self.oklch.l, self.oklch.c, self.oklch.h, alpha),
        }
    }

    /// Increase this color's alpha by the given amount, clamping at 1.
    #[inline]
    pub fn opacify(&self, amount: Float) -> Self {
        self.with_alpha(self.oklch.alpha + amount)
    }

    /// Decrease this color's alpha by the given amount, clamping at 0.
    #[inline]
    pub fn transparentize(&self, amount: Float) -> Self {
        self.with_alpha(self.oklch.alpha - amount)
    }

    // ----------------------------------------------------------------------
    // Gamut

    /// Determine whether this color fits into the given gamut.
    #[inline]
    pub fn is_in_gamut(&self, gamut: Gamut) -> bool {
        in_gamut(self.oklch, gamut)
    }

    /// Map this color into the given gamut, preserving lightness and hue. See
    /// [`map_to_gamut`](crate::map_to_gamut).
    pub fn map_to_gamut(&self, gamut: Gamut) -> Self {
        Self {
            oklch: map_to_gamut(self.oklch, gamut, GamutOptions::default()),
        }
    }

    // ----------------------------------------------------------------------
    // Contrast and distance

    /// Compute this color's WCAG relative luminance.
    #[inline]
    pub fn luminance(&self) -> Float {
        luminance(&self.to_rgba())
    }

    /// Compute the WCAG contrast ratio between this color and another one.
    #[inline]
    pub fn contrast_against(&self, other: &Self) -> Float {
        contrast_ratio(&self.to_rgba(), &other.to_rgba())
    }

    /// Compute the APCA Lc contrast of this color as text against the given
    /// background.
    #[inline]
    pub fn apca_against(&self, background: &Self) -> Float {
        apca_contrast(&self.to_rgba(), &background.to_rgba())
    }

    /// Compute the perceptual distance ΔE-OK between this color and another
    /// one, ignoring alpha.
    pub fn distance(&self, other: &Self) -> Float {
        let a = self.to_oklab();
        let b = other.to_oklab();
        delta_e_ok(&[a.l, a.a, a.b], &[b.l, b.a, b.b])
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::new(Rgba::BLACK)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Self::new(color)
    }
}

impl From<Hsla> for Color {
    fn from(color: Hsla) -> Self {
        Self::new(color)
    }
}

impl From<Oklch> for Color {
    fn from(color: Oklch) -> Self {
        Self::new(color)
    }
}

impl From<Oklab> for Color {
    fn from(color: Oklab) -> Self {
        Self::new(color)
    }
}

impl From<Xyz> for Color {
    fn from(color: Xyz) -> Self {
        Self::new(color)
    }
}

impl From<P3> for Color {
    fn from(color: P3) -> Self {
        Self::new(color)
    }
}

impl PartialEq for Color {
    /// Compare the canonical Oklch coordinates after dropping insignificant
    /// digits, so that colors arriving through different conversion chains
    /// still compare equal.
    fn eq(&self, other: &Self) -> bool {
        eq_key(&self.oklch) == eq_key(&other.oklch)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        eq_key(&self.oklch).hash(state);
    }
}

fn eq_key(oklch: &Oklch) -> [crate::Bits; 4] {
    [
        to_eq_bits(oklch.l),
        to_eq_bits(oklch.c),
        // Scale the rotation to unit range so that hue and the other
        // coordinates lose digits at comparable magnitudes.
        to_eq_bits(oklch.h.rem_euclid(360.0) / 360.0),
        to_eq_bits(oklch.alpha),
    ]
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.oklch, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_constructors_agree() {
        assert_eq!(Color::srgb(255, 147, 0), Color::from_24bit(0xff9300));
        assert_eq!(rgb!(255, 147, 0), Color::srgb(255, 147, 0));
        assert_eq!(
            Color::new(Hsla::new(0.0, 1.0, 0.5, 1.0)),
            Color::srgb(255, 0, 0)
        );
    }

    #[test]
    fn test_immutability() {
        let blue = Color::srgb(49, 120, 234);
        let _ = blue.lighten(0.2).saturate(0.05).rotate(90.0);
        assert_eq!(blue, Color::srgb(49, 120, 234));
    }

    #[test]
    fn test_lighten_darken() {
        let blue = Color::srgb(49, 120, 234);
        assert!(blue.lighten(0.1).to_oklch().l > blue.to_oklch().l);
        assert!(blue.darken(0.1).to_oklch().l < blue.to_oklch().l);

        // Lightness saturates at the boundaries.
        assert_eq!(blue.lighten(5.0).to_oklch().l, 1.0);
        assert_eq!(blue.darken(5.0).to_oklch().l, 0.0);
    }

    #[test]
    fn test_saturate_stays_in_gamut() {
        let red = Color::srgb(200, 80, 80);
        let vivid = red.saturate(0.5);
        assert!(vivid.is_in_gamut(Gamut::Srgb));
        assert!(vivid.to_oklch().c >= red.to_oklch().c);

        let muted = red.desaturate(0.5);
        assert_eq!(muted.to_oklch().c, 0.0);
    }

    #[test]
    fn test_rotate_and_complement() {
        let red = Color::srgb(255, 0, 0);
        assert_close_enough!(
            red.rotate(90.0).to_oklch().h,
            red.to_oklch().h + 90.0
        );
        assert_eq!(red.complement(), red.rotate(180.0));

        let wrapped = red.rotate(-30.0).to_oklch().h;
        let forward = red.rotate(330.0).to_oklch().h;
        assert!((wrapped - forward).abs() < 1e-9);
    }

    #[test]
    fn test_grayscale() {
        let gray = Color::srgb(49, 120, 234).grayscale();
        let oklch = gray.to_oklch();
        assert_eq!(oklch.c, 0.0);

        let rgba = gray.to_rgba();
        assert_eq!(rgba.r, rgba.g);
        assert_eq!(rgba.g, rgba.b);
    }

    #[test]
    fn test_grayscale_preserves_lightness_hue_alpha() {
        let color = Color::new(Oklch::new(0.6, 0.15, 200.0, 0.5));
        let gray = color.grayscale().to_oklch();
        assert_eq!(gray.l, 0.6);
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 200.0);
        assert_eq!(gray.alpha, 0.5);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Color::srgb(255, 255, 255).invert(), Color::srgb(0, 0, 0));
        assert_eq!(
            Color::srgb(255, 0, 0).invert(),
            Color::srgb(0, 255, 255)
        );
        // Inverting twice round-trips exactly at the 8-bit level.
        let color = Color::srgb(49, 120, 234);
        assert_eq!(color.invert().invert().to_rgba(), color.to_rgba());
    }

    #[test]
    fn test_invert_lightness() {
        let color = Color::oklch(0.3, 0.1, 200.0);
        let flipped = color.invert_lightness();
        assert_close_enough!(flipped.to_oklch().l, 0.7);
        assert_eq!(flipped.to_oklch().h, 200.0);
    }

    #[test]
    fn test_mix_boundary_laws() {
        let red = Color::srgb(255, 0, 0);
        let blue = Color::srgb(0, 0, 255);

        let keep = MixOptions {
            ratio: 0.0,
            ..Default::default()
        };
        assert_eq!(red.mix(&blue, keep), red);

        let replace = MixOptions {
            ratio: 1.0,
            ..Default::default()
        };
        assert_eq!(red.mix(&blue, replace), blue);

        assert_eq!(red.mix(&red, MixOptions::default()), red);

        // Out-of-range ratios clamp.
        let over = MixOptions {
            ratio: 7.5,
            ..Default::default()
        };
        assert_eq!(red.mix(&blue, over), blue);
    }

    #[test]
    fn test_mix_takes_shorter_hue_arc() {
        let a = Color::oklch(0.7, 0.15, 350.0);
        let b = Color::oklch(0.7, 0.15, 10.0);
        let mid = a.mix(&b, MixOptions::default());
        assert_close_enough!(mid.to_oklch().h, 0.0);
    }

    #[test]
    fn test_mix_in_rgb() {
        let options = MixOptions {
            space: MixSpace::Rgb,
            ..Default::default()
        };
        let mid = Color::srgb(0, 0, 0).mix(&Color::srgb(255, 255, 255), options);
        assert_eq!(mid.to_rgba(), Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_mix_in_rgb_boundary_laws() {
        // A color that no 8-bit triple reproduces exactly. The boundary
        // ratios must hand back the endpoint without rounding it.
        let a = Color::new(Oklch::new(0.6234, 0.1111, 200.37, 1.0));
        let b = Color::srgb(255, 202, 0);

        let keep = MixOptions {
            ratio: 0.0,
            space: MixSpace::Rgb,
            ..Default::default()
        };
        assert_eq!(a.mix(&b, keep).to_oklch(), a.to_oklch());

        let replace = MixOptions {
            ratio: 1.0,
            space: MixSpace::Rgb,
            ..Default::default()
        };
        assert_eq!(b.mix(&a, replace).to_oklch(), a.to_oklch());
    }

    #[test]
    fn test_alpha_ops() {
        let color = Color::srgb(49, 120, 234).with_alpha(0.5);
        assert_eq!(color.alpha(), 0.5);
        assert_eq!(color.opacify(0.25).alpha(), 0.75);
        assert_eq!(color.transparentize(0.25).alpha(), 0.25);
        assert_eq!(color.opacify(2.0).alpha(), 1.0);
        assert_eq!(color.transparentize(2.0).alpha(), 0.0);
    }

    #[test]
    fn test_distance() {
        let red = Color::srgb(255, 0, 0);
        assert_eq!(red.distance(&red), 0.0);
        let blue = Color::srgb(0, 0, 255);
        assert_eq!(red.distance(&blue), blue.distance(&red));
        assert!(red.distance(&blue) > red.distance(&Color::srgb(255, 60, 30)));
    }

    #[test]
    fn test_contrast_conveniences() {
        let black = Color::default();
        let white = Color::srgb(255, 255, 255);
        assert!((black.contrast_against(&white) - 21.0).abs() < 1e-9);
        assert!(black.apca_against(&white) > 100.0);
        assert_eq!(black.luminance(), 0.0);
    }

    #[test]
    fn test_eq_and_hash_agree() {
        use std::collections::HashSet;

        let mut colors = HashSet::new();
        colors.insert(Color::srgb(255, 0, 0));
        assert!(colors.contains(&Color::new(Rgba::opaque(255, 0, 0))));
        assert!(!colors.contains(&Color::srgb(254, 0, 0)));
    }
}
