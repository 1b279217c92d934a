use crate::Float;

/// Replace not-a-number with zero.
///
/// Every constructor in this module funnels its coordinates through this
/// function first, so no value type ever stores a not-a-number.
#[inline]
fn definite(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[inline]
fn unit(value: Float) -> Float {
    definite(value).clamp(0.0, 1.0)
}

#[inline]
fn degrees(value: Float) -> Float {
    definite(value).rem_euclid(360.0)
}

/// A gamma-encoded sRGB color with 8-bit channels and unit-range alpha.
///
/// The red, green, and blue channels are integers `0..=255`; arithmetic on
/// colors happens in floating point and is rounded and clamped only when it
/// crosses back into this type.
///
/// ```
/// # use okcolor::Rgba;
/// let gray = Rgba::new(150, 150, 150, 1.0);
/// assert_eq!(gray.r, 150);
/// assert_eq!(gray.alpha, 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Float,
}

impl Rgba {
    /// Opaque black, `rgb(0 0 0)`.
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        alpha: 1.0,
    };

    /// Opaque white, `rgb(255 255 255)`.
    pub const WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        alpha: 1.0,
    };

    /// Create a new sRGB color. The alpha is clamped to `0..=1`.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, alpha: Float) -> Self {
        Self {
            r,
            g,
            b,
            alpha: unit(alpha),
        }
    }

    /// Create a new opaque sRGB color.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a new sRGB color from unit-range floating point channels.
    ///
    /// Channels are clamped to `0..=1` and rounded to the nearest 8-bit
    /// value. This is the only place in the crate where coordinates are
    /// rounded to integers.
    pub(crate) fn from_floats(channels: [Float; 3], alpha: Float) -> Self {
        let [r, g, b] = channels;
        Self {
            r: (unit(r) * 255.0).round() as u8,
            g: (unit(g) * 255.0).round() as u8,
            b: (unit(b) * 255.0).round() as u8,
            alpha: unit(alpha),
        }
    }

    /// Access the gamma-encoded channels as unit-range floats.
    pub(crate) fn to_floats(self) -> [Float; 3] {
        [
            Float::from(self.r) / 255.0,
            Float::from(self.g) / 255.0,
            Float::from(self.b) / 255.0,
        ]
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({} {} {}", self.r, self.g, self.b)?;
        write_alpha(f, self.alpha)
    }
}

/// A linear-light RGB triple.
///
/// Linear RGB only appears in the middle of conversions and gamut tests, so
/// it stays crate-internal. Channels may exceed `0..=1` while a color is out
/// of gamut; nothing clamps them here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct LinearRgb {
    pub(crate) r: Float,
    pub(crate) g: Float,
    pub(crate) b: Float,
}

impl LinearRgb {
    #[inline]
    pub(crate) fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }
}

/// A color in the cylindrical HSL representation of sRGB.
///
/// The hue is normalized to `0..360`; saturation, lightness, and alpha are
/// clamped to `0..=1`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub alpha: Float,
}

impl Hsla {
    /// Create a new HSL color, normalizing the hue and clamping the rest.
    ///
    /// ```
    /// # use okcolor::Hsla;
    /// let teal = Hsla::new(-180.0, 1.5, 0.5, 1.0);
    /// assert_eq!(teal.h, 180.0);
    /// assert_eq!(teal.s, 1.0);
    /// ```
    #[inline]
    pub fn new(h: Float, s: Float, l: Float, alpha: Float) -> Self {
        Self {
            h: degrees(h),
            s: unit(s),
            l: unit(l),
            alpha: unit(alpha),
        }
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )?;
        write_alpha(f, self.alpha)
    }
}

/// A color in Oklch, the cylindrical form of Oklab.
///
/// This is the canonical representation of [`Color`](crate::Color): lightness
/// `0..=1`, non-negative chroma (in practice below roughly 0.4), and a hue
/// normalized to `0..360`.
///
/// Achromatic colors carry whatever hue they were constructed with. The
/// conversion pipeline itself reports a hue of zero whenever chroma falls
/// below [`ACHROMATIC_CHROMA`](crate::ACHROMATIC_CHROMA).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
    pub alpha: Float,
}

impl Oklch {
    /// Create a new Oklch color, clamping lightness to `0..=1`, chroma to
    /// `0..`, and normalizing the hue.
    #[inline]
    pub fn new(l: Float, c: Float, h: Float, alpha: Float) -> Self {
        Self {
            l: unit(l),
            c: definite(c).max(0.0),
            h: degrees(h),
            alpha: unit(alpha),
        }
    }
}

impl std::fmt::Display for Oklch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "oklch({} {} {}", self.l, self.c, self.h)?;
        write_alpha(f, self.alpha)
    }
}

/// A color in Oklab, the Cartesian form of the same perceptually uniform
/// color space as [`Oklch`].
///
/// The a axis varies red/green and the b axis varies blue/yellow. Neither has
/// hard limits, though in practice both stay within `-0.4..=0.4`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Oklab {
    /// Create a new Oklab color, clamping lightness and alpha.
    #[inline]
    pub fn new(l: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self {
            l: unit(l),
            a: definite(a),
            b: definite(b),
            alpha: unit(alpha),
        }
    }
}

impl std::fmt::Display for Oklab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "oklab({} {} {}", self.l, self.a, self.b)?;
        write_alpha(f, self.alpha)
    }
}

/// A color in CIE XYZ with the D65 white point.
///
/// XYZ is the root of the conversion graph; every pair of unrelated color
/// spaces converts through it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub alpha: Float,
}

impl Xyz {
    /// Create a new XYZ color. XYZ is unbounded, so only alpha is clamped.
    #[inline]
    pub fn new(x: Float, y: Float, z: Float, alpha: Float) -> Self {
        Self {
            x: definite(x),
            y: definite(y),
            z: definite(z),
            alpha: unit(alpha),
        }
    }
}

impl std::fmt::Display for Xyz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "color(xyz-d65 {} {} {}", self.x, self.y, self.z)?;
        write_alpha(f, self.alpha)
    }
}

/// A gamma-encoded Display P3 color with unit-range channels.
///
/// Unlike CSS Color 4, which tolerates out-of-range `color(display-p3 ...)`
/// coordinates, this type clamps its channels to `0..=1` on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct P3 {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub alpha: Float,
}

impl P3 {
    /// Create a new Display P3 color, clamping every channel to `0..=1`.
    #[inline]
    pub fn new(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            alpha: unit(alpha),
        }
    }
}

impl std::fmt::Display for P3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "color(display-p3 {} {} {}", self.r, self.g, self.b)?;
        write_alpha(f, self.alpha)
    }
}

/// Finish a CSS-flavored color string, appending ` / alpha` only when the
/// color is translucent.
fn write_alpha(f: &mut std::fmt::Formatter<'_>, alpha: Float) -> std::fmt::Result {
    if alpha < 1.0 {
        write!(f, " / {})", alpha)
    } else {
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rgba_construction() {
        let color = Rgba::new(12, 200, 255, 1.5);
        assert_eq!(color.alpha, 1.0);

        let color = Rgba::from_floats([1.2, -0.1, 0.50001], 0.5);
        assert_eq!((color.r, color.g, color.b), (255, 0, 128));
        assert_eq!(color.alpha, 0.5);
    }

    #[test]
    fn test_hue_normalization() {
        assert_eq!(Hsla::new(540.0, 0.5, 0.5, 1.0).h, 180.0);
        assert_eq!(Hsla::new(-90.0, 0.5, 0.5, 1.0).h, 270.0);
        assert_eq!(Oklch::new(0.5, 0.1, 361.0, 1.0).h, 1.0);
    }

    #[test]
    fn test_nan_is_zeroed() {
        let color = Oklch::new(Float::NAN, Float::NAN, Float::NAN, Float::NAN);
        assert_eq!(color, Oklch::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_p3_clamps_channels() {
        let color = P3::new(1.25, -0.5, 0.5, 1.0);
        assert_eq!((color.r, color.g, color.b), (1.0, 0.0, 0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rgba::opaque(255, 0, 0)), "rgb(255 0 0)");
        assert_eq!(
            format!("{}", Rgba::new(0, 0, 0, 0.5)),
            "rgb(0 0 0 / 0.5)"
        );
        assert_eq!(
            format!("{}", Oklch::new(0.5, 0.1, 200.0, 1.0)),
            "oklch(0.5 0.1 200)"
        );
    }
}
