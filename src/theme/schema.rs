//! Attribute schema of themes
//!
//! Each [`Category`] has a fixed set of attributes. Every attribute maps to one or
//! several keys of the external configuration, and carries the [`Check`] that
//! validates values before they are stored.
//! The table is static data: it is part of the theme file format, and existing
//! theme files rely on it.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rc;

/// Options for the axis along which grid lines are drawn
pub const AXIS_OPTIONS: &[&str] = &["both", "x", "y"];
/// Options for locations
pub const LOCATION_OPTIONS: &[&str] = &["left", "right", "bottom", "top", "center"];
/// Options for horizontal alignment
pub const HORIZONTAL_ALIGNMENT_OPTIONS: &[&str] = &["center", "right", "left"];
/// Options for vertical alignment
pub const VERTICAL_ALIGNMENT_OPTIONS: &[&str] =
    &["center", "top", "bottom", "baseline", "center_baseline"];
/// Options for tick directions
pub const DIRECTION_OPTIONS: &[&str] = &["in", "out", "inout"];
/// Options for the tick level grid lines are based on
pub const TICK_OPTIONS: &[&str] = &["major", "minor", "both"];
/// Options for line styles
pub const LINE_STYLE_OPTIONS: &[&str] = &["-", "--", "-.", ":", ""];
/// Options for relative font sizes
pub const FONT_SIZE_OPTIONS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large",
];
/// Options for generic font families
pub const FONT_FAMILY_OPTIONS: &[&str] = &["serif", "sans-serif", "monospace", "cursive", "fantasy"];
/// Options for font styles
pub const FONT_STYLE_OPTIONS: &[&str] = &["normal", "roman", "italic", "oblique"];
/// Options for font stretch
pub const FONT_STRETCH_OPTIONS: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "normal",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
    "wider",
    "narrower",
];
/// Options for font variants
pub const FONT_VARIANT_OPTIONS: &[&str] = &["normal", "small-caps"];
/// Options for font weights
pub const FONT_WEIGHT_OPTIONS: &[&str] = &[
    "ultralight",
    "light",
    "normal",
    "regular",
    "book",
    "medium",
    "roman",
    "semibold",
    "demibold",
    "demi",
    "bold",
    "heavy",
    "extra bold",
    "black",
];

/// Numeric font weights are accepted within this range
const FONT_WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1000.0;

/// A value stored in the theme parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A boolean flag
    Bool(bool),
    /// A number
    Number(f64),
    /// A string
    Text(String),
    /// A list of strings
    List(Vec<String>),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(value: [&str; N]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<ParamValue> for rc::Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Bool(b) => rc::Value::Bool(b),
            ParamValue::Number(n) => rc::Value::Number(n),
            ParamValue::Text(s) => rc::Value::Text(s),
            ParamValue::List(l) => rc::Value::List(l),
        }
    }
}

/// Validation rule of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// A boolean flag
    Flag,
    /// Any finite number
    Number,
    /// One of the given options
    OneOf(&'static [&'static str]),
    /// A number or one of the given relative sizes
    NumberOr(&'static [&'static str]),
    /// A number within 0..=1000 or a named font weight
    Weight,
    /// A color specification, passed as is
    Color,
    /// A single font name or a list of font names, stored as a list
    Fonts,
    /// A list of colors (a single color is accepted), converted to a color cycle on apply
    Palette,
}

impl Check {
    /// Validate and normalize a value.
    /// Returns `None` if the value is not acceptable for this rule.
    pub fn validate(&self, value: ParamValue) -> Option<ParamValue> {
        match (self, value) {
            (Check::Flag, v @ ParamValue::Bool(_)) => Some(v),
            (Check::Number, ParamValue::Number(n)) if n.is_finite() => Some(ParamValue::Number(n)),
            (Check::OneOf(opts), ParamValue::Text(s)) if opts.contains(&s.as_str()) => {
                Some(ParamValue::Text(s))
            }
            (Check::NumberOr(_), ParamValue::Number(n)) if n.is_finite() => {
                Some(ParamValue::Number(n))
            }
            (Check::NumberOr(opts), ParamValue::Text(s)) if opts.contains(&s.as_str()) => {
                Some(ParamValue::Text(s))
            }
            (Check::Weight, ParamValue::Number(n)) if FONT_WEIGHT_RANGE.contains(&n) => {
                Some(ParamValue::Number(n))
            }
            (Check::Weight, ParamValue::Text(s)) if FONT_WEIGHT_OPTIONS.contains(&s.as_str()) => {
                Some(ParamValue::Text(s))
            }
            (Check::Color, ParamValue::Text(s)) if !s.trim().is_empty() => {
                Some(ParamValue::Text(s))
            }
            (Check::Fonts | Check::Palette, ParamValue::Text(s)) if !s.trim().is_empty() => {
                Some(ParamValue::List(vec![s]))
            }
            (Check::Fonts | Check::Palette, ParamValue::List(l)) if !l.is_empty() => {
                Some(ParamValue::List(l))
            }
            _ => None,
        }
    }
}

/// An attribute of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr {
    /// Name of the attribute, as stored in theme files
    pub name: &'static str,
    /// The configuration keys the attribute is written to
    pub keys: &'static [&'static str],
    /// Validation rule
    pub check: Check,
}

impl Attr {
    const fn new(name: &'static str, keys: &'static [&'static str], check: Check) -> Self {
        Attr { name, keys, check }
    }

    /// Convert a stored value to the configuration value written to every key
    pub fn rc_value(&self, value: &ParamValue) -> rc::Value {
        match (self.check, value) {
            (Check::Palette, ParamValue::List(colors)) => rc::Cycle::color(colors.clone()).into(),
            (Check::Palette, ParamValue::Text(color)) => {
                rc::Cycle::color(vec![color.clone()]).into()
            }
            _ => value.clone().into(),
        }
    }
}

const TITLE: &[Attr] = &[
    Attr::new("location", &["axes.titlelocation"], Check::OneOf(LOCATION_OPTIONS)),
    Attr::new("pad", &["axes.titlepad"], Check::Number),
    Attr::new("size", &["axes.titlesize"], Check::NumberOr(FONT_SIZE_OPTIONS)),
    Attr::new("weight", &["axes.titleweight"], Check::Weight),
];

const GRID: &[Attr] = &[
    Attr::new("draw", &["polaraxes.grid", "axes.grid", "axes3d.grid"], Check::Flag),
    Attr::new("axis", &["axes.grid.axis"], Check::OneOf(AXIS_OPTIONS)),
    Attr::new("ticks", &["axes.grid.which"], Check::OneOf(TICK_OPTIONS)),
    Attr::new("alpha", &["grid.alpha"], Check::Number),
    Attr::new("style", &["grid.linestyle"], Check::OneOf(LINE_STYLE_OPTIONS)),
    Attr::new("width", &["grid.linewidth"], Check::Number),
];

const LINES: &[Attr] = &[
    Attr::new("style", &["lines.linestyle"], Check::OneOf(LINE_STYLE_OPTIONS)),
    Attr::new("width", &["lines.linewidth"], Check::Number),
];

const FONTS: &[Attr] = &[
    Attr::new("family", &["font.family"], Check::OneOf(FONT_FAMILY_OPTIONS)),
    Attr::new("cursive", &["font.cursive"], Check::Fonts),
    Attr::new("fantasy", &["font.fantasy"], Check::Fonts),
    Attr::new("monospace", &["font.monospace"], Check::Fonts),
    Attr::new("sans-serif", &["font.sans-serif"], Check::Fonts),
    Attr::new("serif", &["font.serif"], Check::Fonts),
    Attr::new("size", &["font.size"], Check::Number),
    Attr::new("stretch", &["font.stretch"], Check::OneOf(FONT_STRETCH_OPTIONS)),
    Attr::new("style", &["font.style"], Check::OneOf(FONT_STYLE_OPTIONS)),
    Attr::new("variant", &["font.variant"], Check::OneOf(FONT_VARIANT_OPTIONS)),
    Attr::new("weight", &["font.weight"], Check::Weight),
];

const COLORS: &[Attr] = &[
    Attr::new("figure_background_color", &["figure.facecolor"], Check::Color),
    Attr::new("plot_background_color", &["axes.facecolor"], Check::Color),
    Attr::new("axes_color", &["axes.edgecolor", "figure.edgecolor"], Check::Color),
    Attr::new("line_color", &["lines.color"], Check::Color),
    Attr::new(
        "text_color",
        &["text.color", "axes.titlecolor", "axes.labelcolor"],
        Check::Color,
    ),
    Attr::new("grid_color", &["grid.color"], Check::Color),
    Attr::new("tick_color", &["xtick.color", "ytick.color"], Check::Color),
    Attr::new(
        "tick_label_color",
        &["xtick.labelcolor", "ytick.labelcolor"],
        Check::Color,
    ),
    Attr::new("axis_label_color", &["axes.labelcolor"], Check::Color),
    Attr::new("palette", &["axes.prop_cycle"], Check::Palette),
];

const AXES: &[Attr] = &[
    Attr::new("width", &["axes.linewidth"], Check::Number),
    Attr::new("bottom", &["axes.spines.bottom"], Check::Flag),
    Attr::new("left", &["axes.spines.left"], Check::Flag),
    Attr::new("right", &["axes.spines.right"], Check::Flag),
    Attr::new("top", &["axes.spines.top"], Check::Flag),
    Attr::new("xmargin", &["axes.xmargin"], Check::Number),
    Attr::new("ymargin", &["axes.ymargin"], Check::Number),
    Attr::new("zmargin", &["axes.zmargin"], Check::Number),
];

const TICKS: &[Attr] = &[
    Attr::new(
        "x_align",
        &["xtick.alignment"],
        Check::OneOf(HORIZONTAL_ALIGNMENT_OPTIONS),
    ),
    Attr::new(
        "y_align",
        &["ytick.alignment"],
        Check::OneOf(VERTICAL_ALIGNMENT_OPTIONS),
    ),
    Attr::new(
        "direction",
        &["xtick.direction", "ytick.direction"],
        Check::OneOf(DIRECTION_OPTIONS),
    ),
    Attr::new(
        "draw_minor",
        &["xtick.minor.visible", "ytick.minor.visible"],
        Check::Flag,
    ),
    Attr::new(
        "width_minor",
        &["xtick.minor.width", "ytick.minor.width"],
        Check::Number,
    ),
    Attr::new(
        "width_major",
        &["xtick.major.width", "ytick.major.width"],
        Check::Number,
    ),
    Attr::new(
        "size_minor",
        &["xtick.minor.size", "ytick.minor.size"],
        Check::Number,
    ),
    Attr::new(
        "size_major",
        &["xtick.major.size", "ytick.major.size"],
        Check::Number,
    ),
    Attr::new(
        "pad_major",
        &["xtick.major.pad", "ytick.major.pad"],
        Check::Number,
    ),
    Attr::new(
        "pad_minor",
        &["xtick.minor.pad", "ytick.minor.pad"],
        Check::Number,
    ),
];

const AXIS_LABELS: &[Attr] = &[
    Attr::new("pad", &["axes.labelpad"], Check::Number),
    Attr::new("size", &["axes.labelsize"], Check::OneOf(FONT_SIZE_OPTIONS)),
    Attr::new("weight", &["axes.labelweight"], Check::Weight),
];

const TICK_LABELS: &[Attr] = &[
    Attr::new(
        "location",
        &["xaxis.labellocation", "yaxis.labellocation"],
        Check::OneOf(LOCATION_OPTIONS),
    ),
    Attr::new(
        "size",
        &["xtick.labelsize", "ytick.labelsize"],
        Check::OneOf(FONT_SIZE_OPTIONS),
    ),
    Attr::new("bottom", &["xtick.labelbottom"], Check::Flag),
    Attr::new("top", &["xtick.labeltop"], Check::Flag),
    Attr::new("left", &["ytick.labelleft"], Check::Flag),
    Attr::new("right", &["ytick.labelright"], Check::Flag),
];

/// Legacy attribute spellings accepted when loading theme files
const ALIASES: &[(Category, &str, &str)] = &[(Category::Ticks, "y_align:", "y_align")];

/// A category of theme attributes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Axes title
    Title,
    /// Grid lines
    Grid,
    /// Plot lines
    Lines,
    /// Fonts
    Fonts,
    /// Colors and palette
    Colors,
    /// Axes frame and margins
    Axes,
    /// Ticks
    Ticks,
    /// Axis labels
    AxisLabels,
    /// Tick labels
    TickLabels,
}

impl Category {
    /// All categories, in file order
    pub const ALL: [Category; 9] = [
        Category::Title,
        Category::Grid,
        Category::Lines,
        Category::Fonts,
        Category::Colors,
        Category::Axes,
        Category::Ticks,
        Category::AxisLabels,
        Category::TickLabels,
    ];

    /// Name of the category, as stored in theme files
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Title => "title",
            Category::Grid => "grid",
            Category::Lines => "lines",
            Category::Fonts => "fonts",
            Category::Colors => "colors",
            Category::Axes => "axes",
            Category::Ticks => "ticks",
            Category::AxisLabels => "axis_labels",
            Category::TickLabels => "tick_labels",
        }
    }

    /// The attributes of this category
    pub const fn attrs(&self) -> &'static [Attr] {
        match self {
            Category::Title => TITLE,
            Category::Grid => GRID,
            Category::Lines => LINES,
            Category::Fonts => FONTS,
            Category::Colors => COLORS,
            Category::Axes => AXES,
            Category::Ticks => TICKS,
            Category::AxisLabels => AXIS_LABELS,
            Category::TickLabels => TICK_LABELS,
        }
    }

    /// Look up an attribute by name
    pub fn attr(&self, name: &str) -> Option<&'static Attr> {
        self.attrs().iter().find(|a| a.name == name)
    }

    /// Look up an attribute by name, accepting legacy spellings
    pub(crate) fn attr_or_alias(&self, name: &str) -> Option<&'static Attr> {
        self.attr(name).or_else(|| {
            ALIASES
                .iter()
                .find(|(cat, alias, _)| cat == self && *alias == name)
                .and_then(|(_, _, canonical)| self.attr(canonical))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.name().parse::<Category>(), Ok(cat));
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.name()));
        }
        assert!("nope".parse::<Category>().is_err());
    }

    #[test]
    fn test_attr_names_unique() {
        for cat in Category::ALL {
            let attrs = cat.attrs();
            for (i, a) in attrs.iter().enumerate() {
                assert!(!a.keys.is_empty(), "{}.{} has no key", cat, a.name);
                assert!(
                    attrs[i + 1..].iter().all(|b| b.name != a.name),
                    "{}.{} is duplicated",
                    cat,
                    a.name
                );
            }
        }
    }

    #[test]
    fn test_fan_out() {
        let attr = Category::Colors.attr("axes_color").unwrap();
        assert_eq!(attr.keys, &["axes.edgecolor", "figure.edgecolor"]);
        let attr = Category::Grid.attr("draw").unwrap();
        assert_eq!(attr.keys.len(), 3);
    }

    #[test]
    fn test_alias() {
        assert!(Category::Ticks.attr("y_align:").is_none());
        let attr = Category::Ticks.attr_or_alias("y_align:").unwrap();
        assert_eq!(attr.name, "y_align");
        assert!(Category::Grid.attr_or_alias("y_align:").is_none());
    }

    #[test]
    fn test_check_one_of() {
        let check = Check::OneOf(AXIS_OPTIONS);
        assert_eq!(check.validate("x".into()), Some("x".into()));
        assert_eq!(check.validate("diagonal".into()), None);
        assert_eq!(check.validate(1.0.into()), None);
    }

    #[test]
    fn test_check_number() {
        assert_eq!(Check::Number.validate(2.into()), Some(2.0.into()));
        assert_eq!(Check::Number.validate(f64::NAN.into()), None);
        assert_eq!(Check::Number.validate("2".into()), None);
        assert_eq!(Check::Number.validate(true.into()), None);
    }

    #[test]
    fn test_check_number_or() {
        let check = Check::NumberOr(FONT_SIZE_OPTIONS);
        assert_eq!(check.validate(12.5.into()), Some(12.5.into()));
        assert_eq!(check.validate("large".into()), Some("large".into()));
        assert_eq!(check.validate("huge".into()), None);
    }

    #[test]
    fn test_check_weight() {
        assert_eq!(Check::Weight.validate("bold".into()), Some("bold".into()));
        assert_eq!(Check::Weight.validate(700.into()), Some(700.0.into()));
        assert_eq!(Check::Weight.validate(1200.into()), None);
        assert_eq!(Check::Weight.validate("fat".into()), None);
    }

    #[test]
    fn test_check_fonts_wraps_single() {
        assert_eq!(
            Check::Fonts.validate("Fira Sans".into()),
            Some(vec!["Fira Sans"].into())
        );
        assert_eq!(
            Check::Fonts.validate(vec!["A", "B"].into()),
            Some(vec!["A", "B"].into())
        );
        assert_eq!(Check::Fonts.validate(Vec::<String>::new().into()), None);
    }

    #[test]
    fn test_palette_rc_value() {
        let attr = Category::Colors.attr("palette").unwrap();
        let value = attr.rc_value(&vec!["#ff0000", "#00ff00"].into());
        assert_eq!(
            value,
            rc::Value::Cycle(rc::Cycle::color(vec!["#ff0000".into(), "#00ff00".into()]))
        );

        let attr = Category::Colors.attr("line_color").unwrap();
        assert_eq!(attr.rc_value(&"red".into()), rc::Value::Text("red".into()));
    }
}
