use crate::color::{ColorValue, Space};

/// Derive one palette cell from a base color and a shade percentage.
///
/// Works in LCH: the lightness is overwritten with `percent` (the base
/// color's own lightness is intentionally ignored, so a shade row reads
/// the same across every column), and chroma is scaled down as the
/// percentage diverges from 50:
///
/// ```text
/// chroma' = chroma * max(0, 1 - |percent - 50| / 50)
/// ```
///
/// Total for any finite percent; values outside 0–100 extrapolate rather
/// than error, and the result may be out of gamut.
pub fn shade(color: &ColorValue, percent: f64) -> ColorValue {
    let [_, chroma, hue] = color.to(Space::Lch).channels();
    let scale = (1.0 - (percent - 50.0).abs() / 50.0).max(0.0);
    ColorValue::lch(percent, chroma * scale, hue)
}
