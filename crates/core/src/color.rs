use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// Color space a [`ColorValue`]'s channels are expressed in.
///
/// Channel semantics per space:
/// - `Srgb`: red, green, blue in 0–255
/// - `Hsl`: hue in 0–360, saturation and lightness in 0–100
/// - `Lch`: lightness in 0–100, chroma in 0–~131, hue in 0–360
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Srgb,
    Hsl,
    Lch,
}

/// An immutable color: three floating-point channels tagged with the space
/// they live in.
///
/// Channels are never clamped here. Out-of-gamut values (a chroma no sRGB
/// triple can reach, a shade pushed past 100) are carried as-is; clamping
/// happens only at the rendering edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    space: Space,
    channels: [f64; 3],
}

impl ColorValue {
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            space: Space::Srgb,
            channels: [r, g, b],
        }
    }

    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self {
            space: Space::Hsl,
            channels: [h, s, l],
        }
    }

    pub fn lch(l: f64, c: f64, h: f64) -> Self {
        Self {
            space: Space::Lch,
            channels: [l, c, h],
        }
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }

    /// Parse a CSS Color 4 literal: `#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`,
    /// `rgb()`/`rgba()`, `hsl()`/`hsla()`, `lch()`, or a named color.
    ///
    /// Alpha components must be well-formed numbers or percentages and are
    /// then discarded. Anything else fails with [`Error::Parse`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::parse(input));
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::parse(input));
        }

        if let Some(caps) = FUNCTION_RE.captures(trimmed) {
            let name = caps[1].to_ascii_lowercase();
            return parse_function(&name, &caps[2]).ok_or_else(|| Error::parse(input));
        }

        if let Some([r, g, b]) = named_color(&trimmed.to_ascii_lowercase()) {
            return Ok(ColorValue::srgb(r as f64, g as f64, b as f64));
        }

        Err(Error::parse(input))
    }

    /// Convert into `space`. Pure and deterministic; round-trips through
    /// any space within 1 unit of 8-bit precision for in-gamut input.
    pub fn to(&self, space: Space) -> ColorValue {
        if self.space == space {
            return *self;
        }
        let srgb = match self.space {
            Space::Srgb => self.channels,
            Space::Hsl => hsl_to_srgb(self.channels),
            Space::Lch => lch_to_srgb(self.channels),
        };
        let channels = match space {
            Space::Srgb => srgb,
            Space::Hsl => srgb_to_hsl(srgb),
            Space::Lch => srgb_to_lch(srgb),
        };
        ColorValue { space, channels }
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::parse(s)
    }
}

static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(rgba?|hsla?|lch)\(\s*(.*?)\s*\)$").expect("valid regex"));

fn parse_hex(hex: &str) -> Option<ColorValue> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let pair = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };

    let bytes = hex.as_bytes();
    let [r, g, b] = match bytes.len() {
        // #rgb and #rgba expand each nibble: x -> x * 17
        3 | 4 => [
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        ],
        6 | 8 => [
            pair(bytes[0], bytes[1])?,
            pair(bytes[2], bytes[3])?,
            pair(bytes[4], bytes[5])?,
        ],
        _ => return None,
    };

    // alpha digits are dropped but must still be valid hex
    if bytes.len() == 4 {
        nibble(bytes[3])?;
    }
    if bytes.len() == 8 {
        pair(bytes[6], bytes[7])?;
    }

    Some(ColorValue::srgb(r as f64, g as f64, b as f64))
}

fn parse_function(name: &str, args: &str) -> Option<ColorValue> {
    // `/ alpha` per Color 4; the alpha must parse but is then dropped
    let (args, alpha) = match args.split_once('/') {
        Some((head, alpha)) => (head, Some(alpha.trim())),
        None => (args, None),
    };
    if let Some(alpha) = alpha {
        alpha_component(alpha)?;
    }
    let tokens: Vec<&str> = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match name {
        "rgb" | "rgba" => {
            // legacy comma syntax may carry alpha as a fourth component
            if tokens.len() < 3 || tokens.len() > 4 {
                return None;
            }
            if tokens.len() == 4 {
                alpha_component(tokens[3])?;
            }
            let r = rgb_component(tokens[0])?;
            let g = rgb_component(tokens[1])?;
            let b = rgb_component(tokens[2])?;
            Some(ColorValue::srgb(r, g, b))
        }
        "hsl" | "hsla" => {
            if tokens.len() < 3 || tokens.len() > 4 {
                return None;
            }
            if tokens.len() == 4 {
                alpha_component(tokens[3])?;
            }
            let h = hue_component(tokens[0])?;
            let s = percent_component(tokens[1])?;
            let l = percent_component(tokens[2])?;
            Some(ColorValue::hsl(h, s, l))
        }
        "lch" => {
            if tokens.len() != 3 {
                return None;
            }
            let l = percent_component(tokens[0])?;
            let c = number(tokens[1])?;
            let h = hue_component(tokens[2])?;
            Some(ColorValue::lch(l, c, h))
        }
        _ => None,
    }
}

fn rgb_component(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => Some(number(pct)? * 255.0 / 100.0),
        None => number(token),
    }
}

fn percent_component(token: &str) -> Option<f64> {
    number(token.strip_suffix('%').unwrap_or(token))
}

fn hue_component(token: &str) -> Option<f64> {
    number(token.strip_suffix("deg").unwrap_or(token))
}

fn alpha_component(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => number(pct),
        None => number(token),
    }
}

fn number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---- sRGB <-> HSL ----------------------------------------------------------
// https://www.rapidtables.com/convert/color/rgb-to-hsl.html

fn hsl_to_srgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

fn srgb_to_hsl([r, g, b]: [f64; 3]) -> [f64; 3] {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    // tiny negative zero from conversion noise reads as achromatic
    let delta = if delta.abs() < 1e-9 { 0.0 } else { delta };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let l = (max + min) / 2.0;
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if delta == 0.0 || denom.abs() < 1e-9 {
        0.0
    } else {
        delta / denom
    };

    [h, s * 100.0, l * 100.0]
}

// ---- sRGB <-> LCH via CIE Lab / XYZ (D65) ----------------------------------

const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Decode a gamma-encoded sRGB channel (0–255) to linear light.
/// Sign-symmetric so out-of-gamut channels stay finite.
fn srgb_to_linear(c: f64) -> f64 {
    let c = c / 255.0;
    if c.abs() <= 0.04045 {
        c / 12.92
    } else {
        c.signum() * ((c.abs() + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light back to a gamma-encoded sRGB channel (0–255),
/// unclamped.
fn linear_to_srgb(c: f64) -> f64 {
    let s = if c.abs() <= 0.0031308 {
        12.92 * c
    } else {
        c.signum() * (1.055 * c.abs().powf(1.0 / 2.4) - 0.055)
    };
    s * 255.0
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

fn srgb_to_lch([r, g, b]: [f64; 3]) -> [f64; 3] {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let lab_b = 200.0 * (fy - fz);

    let c = (a * a + lab_b * lab_b).sqrt();
    // hue is undefined for achromatic colors; pin it to 0 instead of
    // letting atan2 noise (or NaN) through
    let h = if c < 1e-4 {
        0.0
    } else {
        lab_b.atan2(a).to_degrees().rem_euclid(360.0)
    };

    [l, c, h]
}

fn lch_to_srgb([l, c, h]: [f64; 3]) -> [f64; 3] {
    let hr = h.to_radians();
    let a = c * hr.cos();
    let lab_b = c * hr.sin();

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - lab_b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * lab_f_inv(fy);
    let z = ZN * lab_f_inv(fz);

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    [linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b)]
}

// ---- CSS named colors ------------------------------------------------------

fn named_color(name: &str) -> Option<[u8; 3]> {
    let rgb = match name {
        "aliceblue" => [0xf0, 0xf8, 0xff],
        "antiquewhite" => [0xfa, 0xeb, 0xd7],
        "aqua" => [0x00, 0xff, 0xff],
        "aquamarine" => [0x7f, 0xff, 0xd4],
        "azure" => [0xf0, 0xff, 0xff],
        "beige" => [0xf5, 0xf5, 0xdc],
        "bisque" => [0xff, 0xe4, 0xc4],
        "black" => [0x00, 0x00, 0x00],
        "blanchedalmond" => [0xff, 0xeb, 0xcd],
        "blue" => [0x00, 0x00, 0xff],
        "blueviolet" => [0x8a, 0x2b, 0xe2],
        "brown" => [0xa5, 0x2a, 0x2a],
        "burlywood" => [0xde, 0xb8, 0x87],
        "cadetblue" => [0x5f, 0x9e, 0xa0],
        "chartreuse" => [0x7f, 0xff, 0x00],
        "chocolate" => [0xd2, 0x69, 0x1e],
        "coral" => [0xff, 0x7f, 0x50],
        "cornflowerblue" => [0x64, 0x95, 0xed],
        "cornsilk" => [0xff, 0xf8, 0xdc],
        "crimson" => [0xdc, 0x14, 0x3c],
        "cyan" => [0x00, 0xff, 0xff],
        "darkblue" => [0x00, 0x00, 0x8b],
        "darkcyan" => [0x00, 0x8b, 0x8b],
        "darkgoldenrod" => [0xb8, 0x86, 0x0b],
        "darkgray" | "darkgrey" => [0xa9, 0xa9, 0xa9],
        "darkgreen" => [0x00, 0x64, 0x00],
        "darkkhaki" => [0xbd, 0xb7, 0x6b],
        "darkmagenta" => [0x8b, 0x00, 0x8b],
        "darkolivegreen" => [0x55, 0x6b, 0x2f],
        "darkorange" => [0xff, 0x8c, 0x00],
        "darkorchid" => [0x99, 0x32, 0xcc],
        "darkred" => [0x8b, 0x00, 0x00],
        "darksalmon" => [0xe9, 0x96, 0x7a],
        "darkseagreen" => [0x8f, 0xbc, 0x8f],
        "darkslateblue" => [0x48, 0x3d, 0x8b],
        "darkslategray" | "darkslategrey" => [0x2f, 0x4f, 0x4f],
        "darkturquoise" => [0x00, 0xce, 0xd1],
        "darkviolet" => [0x94, 0x00, 0xd3],
        "deeppink" => [0xff, 0x14, 0x93],
        "deepskyblue" => [0x00, 0xbf, 0xff],
        "dimgray" | "dimgrey" => [0x69, 0x69, 0x69],
        "dodgerblue" => [0x1e, 0x90, 0xff],
        "firebrick" => [0xb2, 0x22, 0x22],
        "floralwhite" => [0xff, 0xfa, 0xf0],
        "forestgreen" => [0x22, 0x8b, 0x22],
        "fuchsia" => [0xff, 0x00, 0xff],
        "gainsboro" => [0xdc, 0xdc, 0xdc],
        "ghostwhite" => [0xf8, 0xf8, 0xff],
        "gold" => [0xff, 0xd7, 0x00],
        "goldenrod" => [0xda, 0xa5, 0x20],
        "gray" | "grey" => [0x80, 0x80, 0x80],
        "green" => [0x00, 0x80, 0x00],
        "greenyellow" => [0xad, 0xff, 0x2f],
        "honeydew" => [0xf0, 0xff, 0xf0],
        "hotpink" => [0xff, 0x69, 0xb4],
        "indianred" => [0xcd, 0x5c, 0x5c],
        "indigo" => [0x4b, 0x00, 0x82],
        "ivory" => [0xff, 0xff, 0xf0],
        "khaki" => [0xf0, 0xe6, 0x8c],
        "lavender" => [0xe6, 0xe6, 0xfa],
        "lavenderblush" => [0xff, 0xf0, 0xf5],
        "lawngreen" => [0x7c, 0xfc, 0x00],
        "lemonchiffon" => [0xff, 0xfa, 0xcd],
        "lightblue" => [0xad, 0xd8, 0xe6],
        "lightcoral" => [0xf0, 0x80, 0x80],
        "lightcyan" => [0xe0, 0xff, 0xff],
        "lightgoldenrodyellow" => [0xfa, 0xfa, 0xd2],
        "lightgray" | "lightgrey" => [0xd3, 0xd3, 0xd3],
        "lightgreen" => [0x90, 0xee, 0x90],
        "lightpink" => [0xff, 0xb6, 0xc1],
        "lightsalmon" => [0xff, 0xa0, 0x7a],
        "lightseagreen" => [0x20, 0xb2, 0xaa],
        "lightskyblue" => [0x87, 0xce, 0xfa],
        "lightslategray" | "lightslategrey" => [0x77, 0x88, 0x99],
        "lightsteelblue" => [0xb0, 0xc4, 0xde],
        "lightyellow" => [0xff, 0xff, 0xe0],
        "lime" => [0x00, 0xff, 0x00],
        "limegreen" => [0x32, 0xcd, 0x32],
        "linen" => [0xfa, 0xf0, 0xe6],
        "magenta" => [0xff, 0x00, 0xff],
        "maroon" => [0x80, 0x00, 0x00],
        "mediumaquamarine" => [0x66, 0xcd, 0xaa],
        "mediumblue" => [0x00, 0x00, 0xcd],
        "mediumorchid" => [0xba, 0x55, 0xd3],
        "mediumpurple" => [0x93, 0x70, 0xdb],
        "mediumseagreen" => [0x3c, 0xb3, 0x71],
        "mediumslateblue" => [0x7b, 0x68, 0xee],
        "mediumspringgreen" => [0x00, 0xfa, 0x9a],
        "mediumturquoise" => [0x48, 0xd1, 0xcc],
        "mediumvioletred" => [0xc7, 0x15, 0x85],
        "midnightblue" => [0x19, 0x19, 0x70],
        "mintcream" => [0xf5, 0xff, 0xfa],
        "mistyrose" => [0xff, 0xe4, 0xe1],
        "moccasin" => [0xff, 0xe4, 0xb5],
        "navajowhite" => [0xff, 0xde, 0xad],
        "navy" => [0x00, 0x00, 0x80],
        "oldlace" => [0xfd, 0xf5, 0xe6],
        "olive" => [0x80, 0x80, 0x00],
        "olivedrab" => [0x6b, 0x8e, 0x23],
        "orange" => [0xff, 0xa5, 0x00],
        "orangered" => [0xff, 0x45, 0x00],
        "orchid" => [0xda, 0x70, 0xd6],
        "palegoldenrod" => [0xee, 0xe8, 0xaa],
        "palegreen" => [0x98, 0xfb, 0x98],
        "paleturquoise" => [0xaf, 0xee, 0xee],
        "palevioletred" => [0xdb, 0x70, 0x93],
        "papayawhip" => [0xff, 0xef, 0xd5],
        "peachpuff" => [0xff, 0xda, 0xb9],
        "peru" => [0xcd, 0x85, 0x3f],
        "pink" => [0xff, 0xc0, 0xcb],
        "plum" => [0xdd, 0xa0, 0xdd],
        "powderblue" => [0xb0, 0xe0, 0xe6],
        "purple" => [0x80, 0x00, 0x80],
        "rebeccapurple" => [0x66, 0x33, 0x99],
        "red" => [0xff, 0x00, 0x00],
        "rosybrown" => [0xbc, 0x8f, 0x8f],
        "royalblue" => [0x41, 0x69, 0xe1],
        "saddlebrown" => [0x8b, 0x45, 0x13],
        "salmon" => [0xfa, 0x80, 0x72],
        "sandybrown" => [0xf4, 0xa4, 0x60],
        "seagreen" => [0x2e, 0x8b, 0x57],
        "seashell" => [0xff, 0xf5, 0xee],
        "sienna" => [0xa0, 0x52, 0x2d],
        "silver" => [0xc0, 0xc0, 0xc0],
        "skyblue" => [0x87, 0xce, 0xeb],
        "slateblue" => [0x6a, 0x5a, 0xcd],
        "slategray" | "slategrey" => [0x70, 0x80, 0x90],
        "snow" => [0xff, 0xfa, 0xfa],
        "springgreen" => [0x00, 0xff, 0x7f],
        "steelblue" => [0x46, 0x82, 0xb4],
        "tan" => [0xd2, 0xb4, 0x8c],
        "teal" => [0x00, 0x80, 0x80],
        "thistle" => [0xd8, 0xbf, 0xd8],
        "tomato" => [0xff, 0x63, 0x47],
        "turquoise" => [0x40, 0xe0, 0xd0],
        "violet" => [0xee, 0x82, 0xee],
        "wheat" => [0xf5, 0xde, 0xb3],
        "white" => [0xff, 0xff, 0xff],
        "whitesmoke" => [0xf5, 0xf5, 0xf5],
        "yellow" => [0xff, 0xff, 0x00],
        "yellowgreen" => [0x9a, 0xcd, 0x32],
        _ => return None,
    };
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn srgb_bytes(color: &ColorValue) -> [i64; 3] {
        let [r, g, b] = color.to(Space::Srgb).channels();
        [
            r.round() as i64,
            g.round() as i64,
            b.round() as i64,
        ]
    }

    #[rstest]
    #[case("#ff0000", [255, 0, 0])]
    #[case("#F00", [255, 0, 0])]
    #[case("#f00c", [255, 0, 0])]
    #[case("#ff000080", [255, 0, 0])]
    #[case("rgb(255, 0, 0)", [255, 0, 0])]
    #[case("rgb(255 0 0)", [255, 0, 0])]
    #[case("rgb(100% 0% 0%)", [255, 0, 0])]
    #[case("rgb(255 0 0 / 0.5)", [255, 0, 0])]
    #[case("rgb(255 0 0 / 50%)", [255, 0, 0])]
    #[case("rgba(255, 0, 0, 0.5)", [255, 0, 0])]
    #[case("  rgb( 12 , 34 , 56 )  ", [12, 34, 56])]
    #[case("hsl(0 100% 50%)", [255, 0, 0])]
    #[case("hsl(120, 100%, 25%)", [0, 128, 0])]
    #[case("hsl(120deg 100% 25% / 1)", [0, 128, 0])]
    #[case("white", [255, 255, 255])]
    #[case("rebeccapurple", [102, 51, 153])]
    #[case("MediumSeaGreen", [60, 179, 113])]
    fn parses_valid_literals(#[case] input: &str, #[case] expected: [i64; 3]) {
        let color = ColorValue::parse(input).expect("parse");
        assert_eq!(srgb_bytes(&color), expected);
    }

    #[test]
    fn parses_lch_components_verbatim() {
        let color = ColorValue::parse("lch(52.2% 72.2 50deg)").expect("parse");
        assert_eq!(color.space(), Space::Lch);
        assert_eq!(color.channels(), [52.2, 72.2, 50.0]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("#ff00000")]
    #[case("#ggg")]
    #[case("rgb(255 0)")]
    #[case("rgb(red 0 0)")]
    #[case("rgb(255 0 0 / banana)")]
    #[case("rgb(1, 2, 3, banana)")]
    #[case("hsl(0, 100%, 50%, banana)")]
    #[case("hsl(0 100%% 50%)")]
    #[case("hsl(120degdeg 100% 25%)")]
    #[case("hsl(0 1 2 3 4)")]
    #[case("lch(50 20)")]
    #[case("lab(50 0 0)")]
    #[case("notacolor")]
    fn rejects_invalid_literals(#[case] input: &str) {
        let err = ColorValue::parse(input).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[rstest]
    #[case("#ff0000")]
    #[case("#00ff00")]
    #[case("#0000ff")]
    #[case("#123456")]
    #[case("#fafafa")]
    #[case("#808080")]
    #[case("#8b5cf6")]
    #[case("#000000")]
    #[case("#ffffff")]
    fn lch_round_trip_stays_within_8bit_precision(#[case] input: &str) {
        let original = ColorValue::parse(input).expect("parse");
        let back = original.to(Space::Lch).to(Space::Srgb);
        for (a, b) in original.channels().iter().zip(back.channels()) {
            assert!(
                (a - b).abs() <= 1.0,
                "{input}: {a} drifted to {b}"
            );
        }
    }

    #[rstest]
    #[case("#ff0000")]
    #[case("#123456")]
    #[case("#fafafa")]
    fn hsl_round_trip_stays_within_8bit_precision(#[case] input: &str) {
        let original = ColorValue::parse(input).expect("parse");
        let back = original.to(Space::Hsl).to(Space::Srgb);
        for (a, b) in original.channels().iter().zip(back.channels()) {
            assert!((a - b).abs() <= 1.0);
        }
    }

    #[test]
    fn achromatic_hue_is_zero_not_nan() {
        for gray in ["#000000", "#808080", "#ffffff"] {
            let [l, c, h] = ColorValue::parse(gray).unwrap().to(Space::Lch).channels();
            assert!(l.is_finite() && c.is_finite());
            assert!(c.abs() < 0.01, "{gray} should be achromatic, chroma {c}");
            assert_eq!(h, 0.0, "{gray} hue should pin to 0");
        }
    }

    #[test]
    fn out_of_gamut_lch_is_not_clamped() {
        let loud = ColorValue::lch(50.0, 130.0, 140.0);
        let srgb = loud.to(Space::Srgb).channels();
        assert!(srgb.iter().all(|v| v.is_finite()));
        // a chroma this high at hue 140 cannot fit in sRGB
        assert!(srgb.iter().any(|v| *v < 0.0 || *v > 255.0));
    }

    #[test]
    fn conversion_to_same_space_is_identity() {
        let color = ColorValue::hsl(210.0, 40.0, 60.0);
        assert_eq!(color.to(Space::Hsl), color);
    }
}
