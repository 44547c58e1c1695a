use crate::rtnextweek::*;
use std::io::{self, Write};

pub type Color = Vec3;

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-2 encode an averaged linear color into 8-bit channels.
/// NaN components, which a degenerate sample can produce, come out black.
pub fn to_rgb8(pixel_color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.000, 0.999);
    let encode = |c: f64| {
        let c = if c.is_nan() { 0.0 } else { c };
        (256.0 * intensity.clamp(linear_to_gamma(c))) as u8
    };
    [
        encode(pixel_color.x),
        encode(pixel_color.y),
        encode(pixel_color.z),
    ]
}

pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = to_rgb8(pixel_color);
    writeln!(out, "{r} {g} {b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_and_clamp() {
        assert_eq!(to_rgb8(Color::zero()), [0, 0, 0]);
        assert_eq!(to_rgb8(Color::new(1.0, 4.0, 0.25)), [255, 255, 128]);
        assert_eq!(to_rgb8(Color::new(-1.0, f64::NAN, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn test_write_color_line() {
        let mut out = Vec::new();
        write_color(&mut out, Color::new(1.0, 0.0, 0.25)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "255 0 128\n");
    }
}
