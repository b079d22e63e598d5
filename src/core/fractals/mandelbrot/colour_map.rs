use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_sample::EscapeSample;

/// Fast-escaping points above this fraction switch to the magenta branch.
pub const HIGHLIGHT_THRESHOLD: f64 = 0.5;

/// Two-branch palette: a green ramp for slow escapes (black inside the set)
/// and a magenta-tinted highlight once `q` is strictly above one half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreenMagentaColourMap;

impl ColourMap<EscapeSample> for GreenMagentaColourMap {
    fn map(&self, sample: EscapeSample) -> Colour {
        let q = sample.value();
        let level = channel_level(q);

        if q > HIGHLIGHT_THRESHOLD {
            Colour::opaque(level, 255, level)
        } else {
            Colour::opaque(0, level, 0)
        }
    }
}

fn channel_level(q: f64) -> u8 {
    (q * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(q: f64) -> Colour {
        GreenMagentaColourMap.map(EscapeSample::from_fraction(q))
    }

    #[test]
    fn test_inside_is_opaque_black() {
        assert_eq!(map(0.0), Colour::opaque(0, 0, 0));
        assert_eq!(map(0.0).to_bytes(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_half_stays_on_green_branch() {
        let colour = map(0.5);

        assert_eq!(colour.r, 0);
        assert_eq!(colour.b, 0);
        assert!(colour.g == 127 || colour.g == 128);
        assert_eq!(colour.a, 255);
    }

    #[test]
    fn test_just_above_half_switches_to_magenta_branch() {
        let q = 0.5 + f64::EPSILON;
        let colour = map(q);

        assert_eq!(colour.g, 255);
        assert_eq!(colour.r, colour.b);
        assert!(colour.r == 127 || colour.r == 128);
    }

    #[test]
    fn test_green_ramp() {
        assert_eq!(map(0.2), Colour::opaque(0, 51, 0));
        assert_eq!(map(1.0 / 52.0), Colour::opaque(0, 5, 0));
    }

    #[test]
    fn test_magenta_branch() {
        assert_eq!(map(0.8), Colour::opaque(204, 255, 204));
        assert_eq!(map(1.0), Colour::opaque(255, 255, 255));
    }
}
