use crate::space::{Hsla, LinearRgb, Oklab, Oklch, Rgba, Xyz, P3};
use crate::Float;

/// The chroma below which a color counts as achromatic.
///
/// The conversion pipeline reports a hue of zero for any color whose chroma
/// falls below this threshold, since the hue angle of a near-gray color is
/// numerically meaningless.
pub const ACHROMATIC_CHROMA: Float = 1e-4;

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-encoded sRGB channel to linear light.
///
/// Display P3 shares the same transfer function. The function extends to
/// negative inputs by mirroring, which keeps it monotone and total on all
/// finite inputs.
///
/// ```
/// # use okcolor::{srgb_to_linear, linear_to_srgb};
/// assert_eq!(srgb_to_linear(0.0), 0.0);
/// assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
/// assert!((linear_to_srgb(srgb_to_linear(0.5)) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Convert a linear-light channel to gamma-encoded sRGB.
///
/// This is the exact inverse of [`srgb_to_linear`] up to floating point
/// tolerance, with the same mirrored extension to negative inputs.
#[inline]
pub fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(1.0 / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

#[inline]
fn gamma_decode(value: &[Float; 3]) -> [Float; 3] {
    [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ]
}

#[inline]
fn gamma_encode(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_to_srgb(value[0]),
        linear_to_srgb(value[1]),
        linear_to_srgb(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

// --------------------------------------------------------------------------------------------------------------------
// Coordinate-level conversions. These operate on bare triples so that the
// typed conversions below, the gamut resolver, and the contrast engine can
// compose them without round-tripping through the value types.

#[inline]
fn linear_srgb_to_xyz_coords(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[inline]
fn xyz_to_linear_srgb_coords(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

#[inline]
fn linear_p3_to_xyz_coords(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_DISPLAY_P3_TO_XYZ, value)
}

#[inline]
fn xyz_to_linear_p3_coords(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value)
}

/// Convert XYZ to Oklab: the M1 matrix into LMS, a cube root, then the M2
/// matrix.
fn xyz_to_oklab_coords(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert Oklab to XYZ: the inverse M2 matrix into LMS', a cube, then the
/// inverse M1 matrix.
fn oklab_to_xyz_coords(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

/// Convert Oklab to Oklch. Chroma below [`ACHROMATIC_CHROMA`] collapses to
/// zero with a zero hue.
fn oklab_to_oklch_coords(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;

    let c = a.hypot(b);
    if c < ACHROMATIC_CHROMA {
        return [l, 0.0, 0.0];
    }

    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    [l, c, h]
}

/// Convert Oklch to Oklab, the polar-to-Cartesian direction.
fn oklch_to_oklab_coords(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    let hue_radian = h.to_radians();
    [l, c * hue_radian.cos(), c * hue_radian.sin()]
}

/// Convert gamma-encoded sRGB to HSL with the classical cylindrical formula.
fn srgb_to_hsl_coords(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };

    [h.rem_euclid(360.0), s, l]
}

/// Convert HSL to gamma-encoded sRGB via the hue sector lookup.
fn hsl_to_srgb_coords(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match sector.floor() as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Convert Oklch coordinates to the linear form of the sRGB gamut. The gamut
/// resolver works on this projection.
pub(crate) fn oklch_to_linear_srgb_coords(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_linear_srgb_coords(&oklab_to_xyz_coords(&oklch_to_oklab_coords(value)))
}

/// Convert Oklch coordinates to the linear form of the Display P3 gamut.
pub(crate) fn oklch_to_linear_p3_coords(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_linear_p3_coords(&oklab_to_xyz_coords(&oklch_to_oklab_coords(value)))
}

// --------------------------------------------------------------------------------------------------------------------
// Typed conversions. Every function is total: intermediate math stays in
// floating point, and values are clamped or rounded only by the constructors
// of the target types. Alpha passes through untouched.

/// Convert sRGB to linear sRGB.
pub(crate) fn rgb_to_linear(color: Rgba) -> LinearRgb {
    let [r, g, b] = gamma_decode(&color.to_floats());
    LinearRgb::new(r, g, b)
}

/// Convert sRGB to Oklch, the canonical representation of this crate.
///
/// ```
/// # use okcolor::{rgb_to_oklch, Rgba};
/// let red = rgb_to_oklch(Rgba::opaque(255, 0, 0));
/// assert!((red.l - 0.628).abs() < 1e-3);
/// assert!((red.c - 0.258).abs() < 1e-3);
/// assert!((red.h - 29.23).abs() < 0.1);
/// ```
pub fn rgb_to_oklch(color: Rgba) -> Oklch {
    let oklab = oklab_from_srgb_coords(&color.to_floats());
    let [l, c, h] = oklab_to_oklch_coords(&oklab);
    Oklch::new(l, c, h, color.alpha)
}

/// Convert Oklch to sRGB.
///
/// Out-of-gamut colors clamp at the 8-bit boundary; run them through
/// [`clamp_to_gamut`](crate::clamp_to_gamut) first for a perceptually closer
/// result.
pub fn oklch_to_rgb(color: Oklch) -> Rgba {
    let linear = oklch_to_linear_srgb_coords(&[color.l, color.c, color.h]);
    Rgba::from_floats(gamma_encode(&linear), color.alpha)
}

/// Convert sRGB to Oklab.
pub fn rgb_to_oklab(color: Rgba) -> Oklab {
    let [l, a, b] = oklab_from_srgb_coords(&color.to_floats());
    Oklab::new(l, a, b, color.alpha)
}

/// Convert Oklab to sRGB.
pub fn oklab_to_rgb(color: Oklab) -> Rgba {
    let xyz = oklab_to_xyz_coords(&[color.l, color.a, color.b]);
    let linear = xyz_to_linear_srgb_coords(&xyz);
    Rgba::from_floats(gamma_encode(&linear), color.alpha)
}

/// Convert Oklab to Oklch, its cylindrical twin.
pub fn oklab_to_oklch(color: Oklab) -> Oklch {
    let [l, c, h] = oklab_to_oklch_coords(&[color.l, color.a, color.b]);
    Oklch::new(l, c, h, color.alpha)
}

/// Convert Oklch to Oklab.
pub fn oklch_to_oklab(color: Oklch) -> Oklab {
    let [l, a, b] = oklch_to_oklab_coords(&[color.l, color.c, color.h]);
    Oklab::new(l, a, b, color.alpha)
}

/// Convert sRGB to HSL.
pub fn rgb_to_hsl(color: Rgba) -> Hsla {
    let [h, s, l] = srgb_to_hsl_coords(&color.to_floats());
    Hsla::new(h, s, l, color.alpha)
}

/// Convert HSL to sRGB.
pub fn hsl_to_rgb(color: Hsla) -> Rgba {
    let channels = hsl_to_srgb_coords(&[color.h, color.s, color.l]);
    Rgba::from_floats(channels, color.alpha)
}

/// Convert HSL to Oklch, through sRGB.
pub fn hsl_to_oklch(color: Hsla) -> Oklch {
    // Going through floating point sRGB, not Rgba, avoids rounding mid-chain.
    let srgb = hsl_to_srgb_coords(&[color.h, color.s, color.l]);
    let [l, c, h] = oklab_to_oklch_coords(&oklab_from_srgb_coords(&srgb));
    Oklch::new(l, c, h, color.alpha)
}

/// Convert Oklch to HSL, through sRGB.
pub fn oklch_to_hsl(color: Oklch) -> Hsla {
    let linear = oklch_to_linear_srgb_coords(&[color.l, color.c, color.h]);
    let srgb = gamma_encode(&linear);
    let clamped = [
        srgb[0].clamp(0.0, 1.0),
        srgb[1].clamp(0.0, 1.0),
        srgb[2].clamp(0.0, 1.0),
    ];
    let [h, s, l] = srgb_to_hsl_coords(&clamped);
    Hsla::new(h, s, l, color.alpha)
}

/// Convert sRGB to XYZ with the D65 white point.
pub fn rgb_to_xyz(color: Rgba) -> Xyz {
    let linear = gamma_decode(&color.to_floats());
    let [x, y, z] = linear_srgb_to_xyz_coords(&linear);
    Xyz::new(x, y, z, color.alpha)
}

/// Convert XYZ to sRGB.
pub fn xyz_to_rgb(color: Xyz) -> Rgba {
    let linear = xyz_to_linear_srgb_coords(&[color.x, color.y, color.z]);
    Rgba::from_floats(gamma_encode(&linear), color.alpha)
}

/// Convert Oklch to XYZ.
pub fn oklch_to_xyz(color: Oklch) -> Xyz {
    let oklab = oklch_to_oklab_coords(&[color.l, color.c, color.h]);
    let [x, y, z] = oklab_to_xyz_coords(&oklab);
    Xyz::new(x, y, z, color.alpha)
}

/// Convert XYZ to Oklch.
pub fn xyz_to_oklch(color: Xyz) -> Oklch {
    let oklab = xyz_to_oklab_coords(&[color.x, color.y, color.z]);
    let [l, c, h] = oklab_to_oklch_coords(&oklab);
    Oklch::new(l, c, h, color.alpha)
}

/// Convert sRGB to Display P3, through XYZ.
///
/// Every sRGB color is inside the P3 gamut, so this conversion loses
/// nothing.
pub fn rgb_to_p3(color: Rgba) -> P3 {
    let xyz = linear_srgb_to_xyz_coords(&gamma_decode(&color.to_floats()));
    let [r, g, b] = gamma_encode(&xyz_to_linear_p3_coords(&xyz));
    P3::new(r, g, b, color.alpha)
}

/// Convert Display P3 to sRGB, clamping colors outside the sRGB gamut at the
/// 8-bit boundary.
pub fn p3_to_rgb(color: P3) -> Rgba {
    let xyz = linear_p3_to_xyz_coords(&gamma_decode(&[color.r, color.g, color.b]));
    let srgb = gamma_encode(&xyz_to_linear_srgb_coords(&xyz));
    Rgba::from_floats(srgb, color.alpha)
}

/// Convert Display P3 to Oklch.
pub fn p3_to_oklch(color: P3) -> Oklch {
    let xyz = linear_p3_to_xyz_coords(&gamma_decode(&[color.r, color.g, color.b]));
    let [l, c, h] = oklab_to_oklch_coords(&xyz_to_oklab_coords(&xyz));
    Oklch::new(l, c, h, color.alpha)
}

/// Convert Oklch to Display P3.
pub fn oklch_to_p3(color: Oklch) -> P3 {
    let oklab = oklch_to_oklab_coords(&[color.l, color.c, color.h]);
    let linear = xyz_to_linear_p3_coords(&oklab_to_xyz_coords(&oklab));
    let [r, g, b] = gamma_encode(&linear);
    P3::new(r, g, b, color.alpha)
}

#[inline]
fn oklab_from_srgb_coords(srgb: &[Float; 3]) -> [Float; 3] {
    xyz_to_oklab_coords(&linear_srgb_to_xyz_coords(&gamma_decode(srgb)))
}

// --------------------------------------------------------------------------------------------------------------------
