//! Text measurement behind a narrow width-of-one-line interface.
//!
//! The engine never shapes text itself; it asks a [`TextMeasurer`] for the
//! rendered width of each line and derives heights from the font size and
//! line-height multiplier. The default measurer estimates widths from a
//! proportional per-character table, which keeps construction deterministic
//! and free of any rendering surface.

use crate::style::Style;
use crate::types::Size;

/// Font parameters handed to a measurer for a single line.
#[derive(Debug, Clone, Copy)]
pub struct FontSpec<'a> {
    pub size: f64,
    pub family: &'a str,
    pub style: &'a str,
}

impl<'a> FontSpec<'a> {
    pub fn from_style(style: &'a Style) -> Self {
        FontSpec {
            size: style.font_size,
            family: &style.font_family,
            style: &style.font_style,
        }
    }
}

/// External text-measurement capability: one line in, pixel width out.
pub trait TextMeasurer {
    fn line_width(&self, line: &str, font: &FontSpec<'_>) -> f64;
}

/// Proportional character widths in hundredths of a character cell,
/// indexed from `' '` (0x20) through `'~'`.
#[rustfmt::skip]
const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width a non-ASCII or control character counts as (one full cell).
const FULL_CELL: u32 = 100;

/// Character cell width as a fraction of the font size.
pub const CHAR_WIDTH_EM: f64 = 0.6;

/// Deterministic measurer using the proportional width table.
#[derive(Debug, Clone)]
pub struct CharTableMeasurer {
    pub char_width_em: f64,
}

impl Default for CharTableMeasurer {
    fn default() -> Self {
        CharTableMeasurer {
            char_width_em: CHAR_WIDTH_EM,
        }
    }
}

impl CharTableMeasurer {
    /// Sum of per-character cells for a line, in hundredths of a cell.
    fn cell_hundredths(line: &str) -> u32 {
        let mut cnt: u32 = 0;
        for c in line.chars() {
            if (' '..='~').contains(&c) {
                cnt += AW_CHAR[(c as usize) - 0x20] as u32;
            } else {
                cnt += FULL_CELL;
            }
        }
        cnt
    }
}

impl TextMeasurer for CharTableMeasurer {
    fn line_width(&self, line: &str, font: &FontSpec<'_>) -> f64 {
        Self::cell_hundredths(line) as f64 * 0.01 * font.size * self.char_width_em
    }
}

/// Measure the bounding box of one or more text lines.
///
/// Width is the widest line; height is `font_size * line_height` per line.
pub fn measure_lines(lines: &[String], style: &Style, measurer: &dyn TextMeasurer) -> Size {
    let font = FontSpec::from_style(style);
    let mut max_width: f64 = 0.0;
    for line in lines {
        max_width = max_width.max(measurer.line_width(line, &font));
    }
    let line_step = style.font_size * style.line_height;
    Size::new(max_width, line_step * lines.len() as f64)
}

/// Compute body dimensions for a callout: measured text plus padding, with
/// explicit `width`/`height` overrides winning per axis.
///
/// When both axes are supplied, measurement is skipped entirely.
pub fn callout_dimensions(lines: &[String], style: &Style, measurer: &dyn TextMeasurer) -> Size {
    if let (Some(width), Some(height)) = (style.width, style.height) {
        return Size::new(width, height);
    }

    let text = measure_lines(lines, style, measurer);
    let dims = Size::new(
        style.width.unwrap_or(text.width + style.padding.x * 2.0),
        style.height.unwrap_or(text.height + style.padding.y * 2.0),
    );
    crate::log::debug!(
        width = dims.width,
        height = dims.height,
        lines = lines.len(),
        "callout dimensions"
    );
    dims
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wider_line_wins() {
        let style = Style::default();
        let measurer = CharTableMeasurer::default();
        let narrow = measure_lines(&lines(&["hi"]), &style, &measurer);
        let wide = measure_lines(&lines(&["hi", "a longer line"]), &style, &measurer);
        assert!(wide.width > narrow.width);
    }

    #[test]
    fn height_scales_with_line_count() {
        let style = Style::default();
        let measurer = CharTableMeasurer::default();
        let one = measure_lines(&lines(&["a"]), &style, &measurer);
        let three = measure_lines(&lines(&["a", "b", "c"]), &style, &measurer);
        let step = style.font_size * style.line_height;
        assert!((one.height - step).abs() < 1e-9);
        assert!((three.height - step * 3.0).abs() < 1e-9);
    }

    #[test]
    fn non_ascii_counts_as_full_cell() {
        assert_eq!(CharTableMeasurer::cell_hundredths("é"), 100);
        assert_eq!(CharTableMeasurer::cell_hundredths("i"), 47);
    }

    #[test]
    fn explicit_dimensions_skip_measurement() {
        struct Panics;
        impl TextMeasurer for Panics {
            fn line_width(&self, _: &str, _: &FontSpec<'_>) -> f64 {
                panic!("measurement should be skipped");
            }
        }
        let style = Style {
            width: Some(120.0),
            height: Some(48.0),
            ..Style::default()
        };
        let dims = callout_dimensions(&lines(&["Hello"]), &style, &Panics);
        assert_eq!(dims, Size::new(120.0, 48.0));
    }

    #[test]
    fn partial_override_still_measures_other_axis() {
        let style = Style {
            width: Some(120.0),
            ..Style::default()
        };
        let measurer = CharTableMeasurer::default();
        let dims = callout_dimensions(&lines(&["Hello"]), &style, &measurer);
        assert_eq!(dims.width, 120.0);
        let expected_h = style.font_size * style.line_height + style.padding.y * 2.0;
        assert!((dims.height - expected_h).abs() < 1e-9);
    }

    #[test]
    fn padding_applies_to_measured_axes() {
        let style = Style::default();
        let measurer = CharTableMeasurer::default();
        let text = measure_lines(&lines(&["Hello"]), &style, &measurer);
        let dims = callout_dimensions(&lines(&["Hello"]), &style, &measurer);
        assert!((dims.width - (text.width + 24.0)).abs() < 1e-9);
        assert!((dims.height - (text.height + 16.0)).abs() < 1e-9);
    }
}
