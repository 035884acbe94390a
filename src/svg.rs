//! SVG serialization of constructed callouts.
//!
//! Output is plain string building: a `<g>` fragment per callout holding the
//! body `<path>` and a centered `<text>` with one `<tspan>` per line, plus a
//! standalone `<svg>` document wrapper for composing several callouts.

use crate::callout::Callout;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

/// Escape text content for SVG: `&`, `<`, `>`.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value: text escapes plus `"`.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Callout {
    /// Serialize this callout as an SVG `<g>` fragment.
    pub fn to_svg_fragment(&self) -> String {
        let style = self.style();
        let anchors = self.anchors();

        let mut out = String::new();
        out.push_str(&format!(
            "<g class=\"callout {}\">\n",
            self.kind().class_name()
        ));
        out.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            self.outline().to_path_data(),
            escape_attr(&style.fill),
            escape_attr(&style.stroke),
            fmt_num(style.stroke_width),
        ));
        out.push_str(&format!(
            "<text x=\"{}\" text-anchor=\"middle\" font-size=\"{}\" font-family=\"{}\" \
             font-style=\"{}\" fill=\"{}\">",
            fmt_num(anchors.center.x),
            fmt_num(style.font_size),
            escape_attr(&style.font_family),
            escape_attr(&style.font_style),
            escape_attr(&style.text_fill),
        ));
        for line in self.text() {
            out.push_str(&format!(
                "<tspan x=\"{}\" y=\"{}\" dominant-baseline=\"central\">{}</tspan>",
                fmt_num(line.x),
                fmt_num(line.y),
                escape_text(&line.content),
            ));
        }
        out.push_str("</text>\n</g>");
        out
    }
}

/// Wrap callout fragments in a standalone SVG document.
pub fn svg_document(callouts: &[Callout], width: f64, height: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NS,
        fmt_num(width),
        fmt_num(height)
    ));
    for callout in callouts {
        out.push_str(&callout.to_svg_fragment());
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}
