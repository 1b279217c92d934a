//! The algorithmic core: conversion pipeline, gamut resolver, contrast
//! engine, and interpolation helpers. The value types live in
//! [`space`](crate::space), the high-level API in [`Color`](crate::Color).

mod contrast;
mod conversion;
mod equality;
mod gamut;
mod interpolate;

pub use contrast::{
    apca_contrast, contrast_ratio, ensure_contrast, luminance, ContrastOptions, APCA_BODY_TEXT,
    APCA_BODY_TEXT_MIN, APCA_CONTENT_TEXT, APCA_FLOOR, APCA_HEADLINE,
};
pub use conversion::{
    hsl_to_oklch, hsl_to_rgb, linear_to_srgb, oklab_to_oklch, oklab_to_rgb, oklch_to_hsl,
    oklch_to_oklab, oklch_to_p3, oklch_to_rgb, oklch_to_xyz, p3_to_oklch, p3_to_rgb, rgb_to_hsl,
    rgb_to_oklab, rgb_to_oklch, rgb_to_p3, rgb_to_xyz, srgb_to_linear, xyz_to_oklch, xyz_to_rgb,
    ACHROMATIC_CHROMA,
};
pub use equality::to_eq_bits;
pub use gamut::{clamp_to_gamut, in_gamut, map_to_gamut, Gamut, GamutOptions, DEFAULT_JND};
pub use interpolate::HueArc;

pub(crate) use interpolate::{adjust_hues, delta_e_ok, lerp};
