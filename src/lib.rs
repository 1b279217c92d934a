//! # okcolor
//!
//! This crate models colors across sRGB, HSL, Oklab/Oklch, XYZ (D65), and
//! Display P3, converts losslessly between them, maps colors into gamuts, and
//! measures contrast:
//!
//!  1. The value types: [`Rgba`], [`Hsla`], [`Oklch`],
//!     [`Oklab`], [`Xyz`], and [`P3`], plain immutable tuples with clamping
//!     constructors and CSS-flavored [`Display`](std::fmt::Display) impls.
//!  2. The typed conversion functions, [`rgb_to_oklch`] and friends, which
//!     are total and keep all intermediate math in floating point.
//!  3. The gamut resolver: [`in_gamut`], [`clamp_to_gamut`], and
//!     [`map_to_gamut`] reduce chroma at constant lightness and hue until a
//!     color fits its target [`Gamut`].
//!  4. The contrast engine: WCAG [`luminance`] and [`contrast_ratio`], the
//!     APCA [`apca_contrast`] metric, and [`ensure_contrast`], which adjusts
//!     a foreground's Oklch lightness until it reads against its background.
//!  5. The high-level [`Color`] facade over all of the above, with
//!     manipulation methods that each return a new color.
//!
//! ```
//! # use okcolor::{Color, Gamut};
//! let accent = Color::from_24bit(0x3178ea);
//! let hover = accent.lighten(0.1).map_to_gamut(Gamut::Srgb);
//! assert!(hover.is_in_gamut(Gamut::Srgb));
//! assert!(accent.contrast_against(&Color::srgb(255, 255, 255)) > 3.0);
//! ```
//!
//! ## Optional features
//!
//!   - `f64`: store coordinates as `f64` (enabled by default; disable for
//!     `f32`).
//!   - `serde`: serialization and deserialization for all value types and
//!     [`Color`] with [serde](https://serde.rs).

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;

/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
#[cfg(feature = "serde")]
mod serde;
mod space;

pub use crate::color::{Color, ColorInput, MixOptions, MixSpace};
pub use crate::core::{
    apca_contrast, clamp_to_gamut, contrast_ratio, ensure_contrast, hsl_to_oklch, hsl_to_rgb,
    in_gamut, linear_to_srgb, luminance, map_to_gamut, oklab_to_oklch, oklab_to_rgb, oklch_to_hsl,
    oklch_to_oklab, oklch_to_p3, oklch_to_rgb, oklch_to_xyz, p3_to_oklch, p3_to_rgb, rgb_to_hsl,
    rgb_to_oklab, rgb_to_oklch, rgb_to_p3, rgb_to_xyz, srgb_to_linear, xyz_to_oklch, xyz_to_rgb,
    ContrastOptions, Gamut, GamutOptions, HueArc, ACHROMATIC_CHROMA, APCA_BODY_TEXT,
    APCA_BODY_TEXT_MIN, APCA_CONTENT_TEXT, APCA_FLOOR, APCA_HEADLINE, DEFAULT_JND,
};
#[doc(hidden)]
pub use crate::core::to_eq_bits;
pub use crate::space::{Hsla, Oklab, Oklch, Rgba, Xyz, P3};
