//! Style configuration and per-call overrides.
//!
//! `Style` is the fully-resolved option set every construction call works
//! from; `StylePatch` is the caller-facing bag of overrides, merged over
//! `Style::default()` per call. The default table is never mutated.

/// Default polar-mode distance from target to body center.
pub const POLAR_DISTANCE: f64 = 60.0;

/// Inner padding between text and the body boundary, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub x: f64,
    pub y: f64,
}

/// Per-axis padding override. Merged deep: an unset axis keeps its default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddingPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Resolved styling for a single callout (Solarized Light defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Width of the pointer where it meets the body edge
    pub pointer_width: f64,
    /// Pull the pointer tip back toward the body by this many units
    pub pointer_shorten: f64,
    /// Rectangle only
    pub corner_radius: f64,
    /// Ellipse only: angular width of the pointer notch, in degrees
    pub pointer_arc: f64,
    pub padding: Padding,
    pub font_size: f64,
    /// Line height multiplier for multi-line text
    pub line_height: f64,
    pub font_family: String,
    pub font_style: String,
    pub text_fill: String,
    /// Explicit body width; wins over measured text
    pub width: Option<f64>,
    /// Explicit body height; wins over measured text
    pub height: Option<f64>,
    /// Polar mode: degrees, 0 = right, 90 = down, 180 = left, -90 = up
    pub angle: Option<f64>,
    /// Polar mode: distance from target to the body center
    pub distance: Option<f64>,
    /// Polar mode: distance from target to the pointer tip
    pub pointer_gap: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: "#fdf6e3".to_string(),
            stroke: "#586e75".to_string(),
            stroke_width: 2.0,
            pointer_width: 14.0,
            pointer_shorten: 0.0,
            corner_radius: 4.0,
            pointer_arc: 20.0,
            padding: Padding { x: 12.0, y: 8.0 },
            font_size: 18.0,
            line_height: 1.3,
            font_family: "'Times New Roman', serif".to_string(),
            font_style: "italic".to_string(),
            text_fill: "#586e75".to_string(),
            width: None,
            height: None,
            angle: None,
            distance: None,
            pointer_gap: 0.0,
        }
    }
}

/// Per-call style overrides. Every field is optional; unset fields fall
/// back to the matching `Style::default()` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub pointer_width: Option<f64>,
    pub pointer_shorten: Option<f64>,
    pub corner_radius: Option<f64>,
    pub pointer_arc: Option<f64>,
    pub padding: Option<PaddingPatch>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
    pub font_family: Option<String>,
    pub font_style: Option<String>,
    pub text_fill: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub angle: Option<f64>,
    pub distance: Option<f64>,
    pub pointer_gap: Option<f64>,
}

impl StylePatch {
    /// Merge this patch over the default style.
    pub fn resolve(&self) -> Style {
        self.apply(Style::default())
    }

    /// Merge this patch over an arbitrary base style.
    ///
    /// Padding merges per axis: overriding `padding.x` alone keeps the
    /// base `padding.y`.
    pub fn apply(&self, base: Style) -> Style {
        let padding = match self.padding {
            Some(p) => Padding {
                x: p.x.unwrap_or(base.padding.x),
                y: p.y.unwrap_or(base.padding.y),
            },
            None => base.padding,
        };
        Style {
            fill: self.fill.clone().unwrap_or(base.fill),
            stroke: self.stroke.clone().unwrap_or(base.stroke),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            pointer_width: self.pointer_width.unwrap_or(base.pointer_width),
            pointer_shorten: self.pointer_shorten.unwrap_or(base.pointer_shorten),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            pointer_arc: self.pointer_arc.unwrap_or(base.pointer_arc),
            padding,
            font_size: self.font_size.unwrap_or(base.font_size),
            line_height: self.line_height.unwrap_or(base.line_height),
            font_family: self.font_family.clone().unwrap_or(base.font_family),
            font_style: self.font_style.clone().unwrap_or(base.font_style),
            text_fill: self.text_fill.clone().unwrap_or(base.text_fill),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            angle: self.angle.or(base.angle),
            distance: self.distance.or(base.distance),
            pointer_gap: self.pointer_gap.unwrap_or(base.pointer_gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let s = Style::default();
        assert_eq!(s.fill, "#fdf6e3");
        assert_eq!(s.stroke, "#586e75");
        assert_eq!(s.pointer_width, 14.0);
        assert_eq!(s.corner_radius, 4.0);
        assert_eq!(s.pointer_arc, 20.0);
        assert_eq!(s.padding, Padding { x: 12.0, y: 8.0 });
        assert_eq!(s.font_size, 18.0);
        assert_eq!(s.line_height, 1.3);
        assert!(s.width.is_none());
        assert!(s.angle.is_none());
    }

    #[test]
    fn empty_patch_is_identity() {
        assert_eq!(StylePatch::default().resolve(), Style::default());
    }

    #[test]
    fn patch_overrides_per_key() {
        let patch = StylePatch {
            fill: Some("red".to_string()),
            pointer_width: Some(20.0),
            ..Default::default()
        };
        let s = patch.resolve();
        assert_eq!(s.fill, "red");
        assert_eq!(s.pointer_width, 20.0);
        assert_eq!(s.stroke, "#586e75");
    }

    #[test]
    fn padding_merges_per_axis() {
        let patch = StylePatch {
            padding: Some(PaddingPatch {
                x: Some(20.0),
                y: None,
            }),
            ..Default::default()
        };
        let s = patch.resolve();
        assert_eq!(s.padding.x, 20.0);
        assert_eq!(s.padding.y, 8.0);
    }
}
