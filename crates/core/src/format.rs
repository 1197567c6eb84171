use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::color::{ColorValue, Space};
use crate::error::Error;

/// The closed set of render formats. Exactly one is active at a time;
/// [`Format::ALL`] fixes the cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum Format {
    Hex,
    Rgb,
    Hsl,
    Lch,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Hex, Format::Rgb, Format::Hsl, Format::Lch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Lch => "lch",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Format::Hex),
            "rgb" => Ok(Format::Rgb),
            "hsl" => Ok(Format::Hsl),
            "lch" => Ok(Format::Lch),
            other => Err(Error::UnsupportedFormat {
                kind: other.to_string(),
            }),
        }
    }
}

/// Serialize a color to its canonical string in the given format.
///
/// Hex and rgb clamp to the displayable 0–255 range; the color value
/// itself is never mutated. Hsl and lch render rounded components with
/// no gamut clamping, so out-of-gamut intent survives a round trip
/// through the text form.
pub fn render(color: &ColorValue, format: Format) -> String {
    match format {
        Format::Hex => {
            let [r, g, b] = srgb_bytes(color);
            format!("#{r:02x}{g:02x}{b:02x}")
        }
        Format::Rgb => {
            let [r, g, b] = srgb_bytes(color);
            format!("rgb({r} {g} {b})")
        }
        Format::Hsl => {
            let [h, s, l] = color.to(Space::Hsl).channels();
            format!(
                "hsl({} {}% {}%)",
                h.round() as i64,
                s.round() as i64,
                l.round() as i64
            )
        }
        Format::Lch => {
            let [l, c, h] = color.to(Space::Lch).channels();
            format!("lch({} {} {})", decimals(l), decimals(c), decimals(h))
        }
    }
}

fn srgb_bytes(color: &ColorValue) -> [u8; 3] {
    let [r, g, b] = color.to(Space::Srgb).channels();
    let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    [byte(r), byte(g), byte(b)]
}

/// Round to at most two decimals and drop trailing zeros.
fn decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
