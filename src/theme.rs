//! Theme model
//!
//! A [`Theme`] gathers:
//!  - `info`: name and description,
//!  - `params`: validated style attributes, grouped by [`Category`],
//!  - `overrides`: raw configuration values, written verbatim after the params,
//!  - `transforms`: post-render geometry transforms (see [`crate::transform`]).
//!
//! Setters are lenient: a value that is not recognized for its attribute is
//! dropped, and the previously stored value (if any) is kept.
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

use plotheme_base::Figure;
use serde::{Deserialize, Serialize};

use crate::context::{Activation, Context};
use crate::transform::{self, Transforms};
use crate::{Result, rc};

pub mod args;
pub mod schema;

pub use args::Args;
pub use schema::{Attr, Category, Check, ParamValue};

const UNTITLED: &str = "Untitled";
const NO_DESCRIPTION: &str = "No description available.";

/// Free-form metadata of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Name of the theme
    #[serde(default = "default_name")]
    pub name: String,
    /// Description of the theme
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_name() -> String {
    UNTITLED.to_string()
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}

impl Default for Info {
    fn default() -> Self {
        Info {
            name: default_name(),
            description: default_description(),
        }
    }
}

/// Validated style attributes, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParams")]
pub struct Params(BTreeMap<Category, BTreeMap<String, ParamValue>>);

type RawParams = BTreeMap<String, serde_json::Value>;

impl Params {
    /// Whether no category is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The attributes set in a category
    pub fn get(&self, category: Category) -> Option<&BTreeMap<String, ParamValue>> {
        self.0.get(&category)
    }

    /// The value of an attribute
    pub fn value(&self, category: Category, attr: &str) -> Option<&ParamValue> {
        self.0.get(&category).and_then(|attrs| attrs.get(attr))
    }

    /// Iterate over categories and their attributes
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeMap<String, ParamValue>)> {
        self.0.iter().map(|(cat, attrs)| (*cat, attrs))
    }

    /// Merge the given values into a category.
    ///
    /// Attributes that are not in the category schema and unset values are ignored.
    /// Attributes of the category that are not mentioned are kept.
    pub fn update<'a, I>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = (&'a str, Option<ParamValue>)>,
    {
        let attrs = self.0.entry(category).or_default();
        for (name, value) in values {
            match (category.attr(name), value) {
                (Some(attr), Some(value)) => {
                    attrs.insert(attr.name.to_string(), value);
                }
                (None, Some(_)) => log::trace!("{}.{} is not a theme attribute", category, name),
                (_, None) => (),
            }
        }
    }
}

impl From<RawParams> for Params {
    fn from(raw: RawParams) -> Self {
        let mut params = Params::default();
        for (cat_name, attrs) in raw {
            let Ok(category) = cat_name.parse::<Category>() else {
                log::warn!("ignoring unknown theme category '{}'", cat_name);
                continue;
            };
            let serde_json::Value::Object(attrs) = attrs else {
                log::warn!("ignoring theme category '{}': not an object", cat_name);
                continue;
            };
            let stored = params.0.entry(category).or_default();
            for (name, value) in attrs {
                let Some(attr) = category.attr_or_alias(&name) else {
                    log::warn!("ignoring unknown theme attribute '{}.{}'", category, name);
                    continue;
                };
                let value = serde_json::from_value::<ParamValue>(value)
                    .ok()
                    .and_then(|v| attr.check.validate(v));
                match value {
                    Some(value) => {
                        stored.insert(attr.name.to_string(), value);
                    }
                    None => log::warn!("ignoring invalid value of '{}.{}'", category, name),
                }
            }
        }
        params
    }
}

/// A named, serializable bundle of style parameters, raw overrides
/// and post-render transforms.
///
/// ```
/// use plotheme::{Context, Session, Theme};
/// use plotheme::theme::args;
/// use plotheme::rc::{Store, Value};
///
/// let mut theme = Theme::new("red frame", "Red axes frame");
/// theme.set_color(args::Colors::new().with_axes_color("#ff0000"));
///
/// let mut session = Session::new();
/// theme.scoped(&mut session, |session| {
///     assert_eq!(session.rc().get("axes.edgecolor"), Some(Value::Text("#ff0000".into())));
/// }).unwrap();
/// assert_eq!(session.rc().get("axes.edgecolor"), Some(Value::Text("black".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    info: Info,
    #[serde(default)]
    params: Params,
    #[serde(default)]
    overrides: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    transforms: Transforms,
}

impl Theme {
    /// Create an empty theme
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Theme {
            info: Info {
                name: name.into(),
                description: description.into(),
            },
            ..Default::default()
        }
    }

    /// Metadata of the theme
    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Name of the theme
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Description of the theme
    pub fn description(&self) -> &str {
        &self.info.description
    }

    /// Style parameters
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The stored value of an attribute
    pub fn param(&self, category: Category, attr: &str) -> Option<&ParamValue> {
        self.params.value(category, attr)
    }

    /// Raw configuration overrides
    pub fn overrides(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.overrides
    }

    /// Post-render transforms
    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    /// Set the attributes of one category.
    ///
    /// Each given value is validated against its attribute; invalid values are dropped.
    pub fn set<A: Args>(&mut self, args: A) -> &mut Self {
        let category = A::CATEGORY;
        let values = args.into_entries().into_iter().map(|(name, value)| {
            let checked = match (category.attr(name), value) {
                (Some(attr), Some(value)) => {
                    let checked = attr.check.validate(value.clone());
                    if checked.is_none() {
                        log::trace!("dropping {}.{} = {:?}", category, name, value);
                    }
                    checked
                }
                _ => None,
            };
            (name, checked)
        });
        self.update_params(category, values.collect::<Vec<_>>());
        self
    }

    /// Merge values into a category, keeping attributes that are not mentioned.
    /// Unset values and attributes unknown to the category are ignored.
    /// No validation of the values is performed here.
    pub fn update_params<'a, I>(&mut self, category: Category, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, Option<ParamValue>)>,
    {
        self.params.update(category, values);
        self
    }

    /// Set title styling options
    pub fn set_title(&mut self, title: args::Title) -> &mut Self {
        self.set(title)
    }

    /// Set grid styling options
    pub fn set_grid(&mut self, grid: args::Grid) -> &mut Self {
        self.set(grid)
    }

    /// Set line styling options
    pub fn set_lines(&mut self, lines: args::Lines) -> &mut Self {
        self.set(lines)
    }

    /// Set font styling options
    pub fn set_font(&mut self, fonts: args::Fonts) -> &mut Self {
        self.set(fonts)
    }

    /// Set colors and palette
    pub fn set_color(&mut self, colors: args::Colors) -> &mut Self {
        self.set(colors)
    }

    /// Set axes frame and margins options
    pub fn set_axes(&mut self, axes: args::Axes) -> &mut Self {
        self.set(axes)
    }

    /// Set ticks styling options
    pub fn set_ticks(&mut self, ticks: args::Ticks) -> &mut Self {
        self.set(ticks)
    }

    /// Set axis labels styling options
    pub fn set_axis_labels(&mut self, labels: args::AxisLabels) -> &mut Self {
        self.set(labels)
    }

    /// Set tick labels styling options
    pub fn set_tick_labels(&mut self, labels: args::TickLabels) -> &mut Self {
        self.set(labels)
    }

    /// Replace the raw configuration overrides.
    /// Overrides are not validated and win over params on conflicting keys.
    pub fn set_overrides<I, K, V>(&mut self, overrides: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.overrides = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set the post-render transforms.
    /// `trim = false` and `offset = None` clear the corresponding transform.
    pub fn set_transforms(&mut self, trim: bool, offset: Option<f32>) -> &mut Self {
        self.transforms = Transforms::new(trim, offset);
        self
    }

    /// The configuration values this theme writes, params first, then overrides.
    pub fn resolve(&self) -> rc::Params {
        let mut values = self.resolve_params();
        values.extend(self.resolve_overrides());
        values
    }

    fn resolve_params(&self) -> rc::Params {
        let mut values = rc::Params::new();
        for (category, attrs) in self.params.iter() {
            // table order: a dedicated attribute wins over a broader one sharing its key
            for attr in category.attrs() {
                let Some(value) = attrs.get(attr.name) else {
                    continue;
                };
                let value = attr.rc_value(value);
                for key in attr.keys {
                    values.insert(key.to_string(), value.clone());
                }
            }
        }
        values
    }

    fn resolve_overrides(&self) -> rc::Params {
        self.overrides
            .iter()
            .map(|(k, v)| (k.clone(), rc::Value::from(v.clone())))
            .collect()
    }

    /// Apply the theme to a configuration store.
    ///
    /// The store is first reset to its defaults, then params are written, then overrides.
    pub fn apply<S: rc::Store + ?Sized>(&self, store: &mut S) {
        let params = self.resolve_params();
        let overrides = self.resolve_overrides();
        log::debug!(
            "applying theme '{}': {} keys, {} overrides",
            self.info.name,
            params.len(),
            overrides.len()
        );
        store.reset();
        store.set_many(params);
        if !overrides.is_empty() {
            store.set_many(overrides);
        }
    }

    /// Run the post-render transforms on a figure
    pub fn apply_transforms(&self, figure: &mut Figure) -> std::result::Result<(), transform::Error> {
        self.transforms.apply(figure)
    }

    /// Activate the theme on a context.
    ///
    /// The current configuration is saved and the theme is applied.
    /// When the returned guard is finished or dropped, the configuration is restored
    /// and the transforms are run on the current figure.
    pub fn activate<'a, C: Context>(&'a self, ctx: &'a mut C) -> Activation<'a, C> {
        Activation::enter(self, ctx)
    }

    /// Run `f` with the theme activated on `ctx`.
    ///
    /// Returns the result of `f`, or the error of a transform run at exit.
    pub fn scoped<C, F, R>(&self, ctx: &mut C, f: F) -> Result<R>
    where
        C: Context,
        F: FnOnce(&mut C) -> R,
    {
        let mut active = self.activate(ctx);
        let res = f(active.context());
        active.finish()?;
        Ok(res)
    }

    /// Serialize as pretty JSON with 4 spaces indentation
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    /// Serialize as a pretty JSON string.
    ///
    /// Themes always serialize: map keys are strings and values are JSON values.
    pub fn to_json(&self) -> String {
        let mut buf = Vec::new();
        self.to_writer(&mut buf).expect("Should serialize to memory");
        String::from_utf8(buf).expect("Should be valid UTF-8")
    }

    /// Parse a theme from a JSON string
    pub fn from_json(json: &str) -> Result<Theme> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to a JSON value
    pub fn to_dict(&self) -> serde_json::Value {
        serde_json::json!({
            "info": self.info,
            "params": self.params,
            "overrides": self.overrides,
            "transforms": self.transforms,
        })
    }

    /// Build a theme from a JSON value.
    /// Missing fields default, unknown fields are ignored.
    pub fn from_dict(dict: serde_json::Value) -> Result<Theme> {
        Ok(serde_json::from_value(dict)?)
    }

    /// Write the theme to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = io::BufWriter::new(file);
        self.to_writer(&mut writer)?;
        io::Write::flush(&mut writer)?;
        Ok(())
    }

    /// Load a theme from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Theme> {
        let path = path.as_ref();
        log::debug!("loading theme from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Theme::from_json(&content)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rc::{MemoryStore, Store, Value};

    fn valid_sample(check: Check) -> ParamValue {
        match check {
            Check::Flag => true.into(),
            Check::Number => 3.25.into(),
            Check::OneOf(opts) => opts[opts.len() - 1].into(),
            Check::NumberOr(opts) => opts[0].into(),
            Check::Weight => "bold".into(),
            Check::Color => "#123456".into(),
            Check::Fonts => vec!["Fira Sans", "Noto Sans"].into(),
            Check::Palette => vec!["#ff0000", "#00ff00", "#0000ff"].into(),
        }
    }

    fn invalid_sample(check: Check) -> ParamValue {
        match check {
            Check::Flag => "yes".into(),
            Check::Number | Check::NumberOr(_) | Check::Weight => "not-a-size".into(),
            Check::OneOf(_) => "not-an-option".into(),
            Check::Color | Check::Fonts | Check::Palette => 1.into(),
        }
    }

    #[test]
    fn test_new_and_default_info() {
        let theme = Theme::default();
        assert_eq!(theme.name(), "Untitled");
        assert_eq!(theme.description(), "No description available.");
        assert!(theme.params().is_empty());

        let theme = Theme::new("t", "d");
        assert_eq!(theme.name(), "t");
        assert_eq!(theme.description(), "d");
    }

    #[test]
    fn test_every_attr_reaches_its_keys() {
        for category in Category::ALL {
            for attr in category.attrs() {
                let mut theme = Theme::default();
                let value = valid_sample(attr.check);
                theme.update_params(category, [(attr.name, Some(value.clone()))]);

                let mut store = MemoryStore::default();
                theme.apply(&mut store);

                let expected = attr.rc_value(&value);
                for key in attr.keys {
                    assert_eq!(
                        store.get(key),
                        Some(expected.clone()),
                        "{}.{} -> {}",
                        category,
                        attr.name,
                        key
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_value_keeps_previous() {
        for category in Category::ALL {
            for attr in category.attrs() {
                let mut theme = Theme::default();
                let valid = attr.check.validate(valid_sample(attr.check)).unwrap();
                theme.update_params(category, [(attr.name, Some(valid.clone()))]);

                let invalid = invalid_sample(attr.check);
                assert_eq!(attr.check.validate(invalid.clone()), None);
                let checked = attr.check.validate(invalid);
                theme.update_params(category, [(attr.name, checked)]);

                assert_eq!(theme.param(category, attr.name), Some(&valid));
            }
        }
    }

    #[test]
    fn test_set_grid_unsupported_axis() {
        let mut theme = Theme::default();
        theme.set_grid(args::Grid::new().with_axis("diagonal"));
        assert_eq!(theme.param(Category::Grid, "axis"), None);

        theme.set_grid(args::Grid::new().with_axis("x"));
        theme.set_grid(args::Grid::new().with_axis("diagonal").with_draw(true));
        assert_eq!(theme.param(Category::Grid, "axis"), Some(&"x".into()));
        assert_eq!(theme.param(Category::Grid, "draw"), Some(&true.into()));
    }

    #[test]
    fn test_set_color_axes_color_fans_out() {
        let mut theme = Theme::default();
        theme.set_color(args::Colors::new().with_axes_color("#ff0000"));

        let mut store = MemoryStore::default();
        theme.apply(&mut store);
        let red = Some(Value::Text("#ff0000".into()));
        assert_eq!(store.get("axes.edgecolor"), red);
        assert_eq!(store.get("figure.edgecolor"), red);
    }

    #[test]
    fn test_axis_label_color_wins_over_text_color() {
        let mut theme = Theme::default();
        theme.set_color(
            args::Colors::new()
                .with_text_color("black")
                .with_axis_label_color("red"),
        );

        let mut store = MemoryStore::default();
        theme.apply(&mut store);
        assert_eq!(store.get("axes.labelcolor"), Some(Value::Text("red".into())));
        assert_eq!(store.get("text.color"), Some(Value::Text("black".into())));
        assert_eq!(store.get("axes.titlecolor"), Some(Value::Text("black".into())));
    }

    #[test]
    fn test_partial_update_keeps_other_attrs() {
        let mut theme = Theme::default();
        theme.set_title(args::Title::new().with_location("left").with_pad(3));
        theme.set_title(args::Title::new().with_size("x-large"));

        let title = theme.params().get(Category::Title).unwrap();
        assert_eq!(title.len(), 3);
        assert_eq!(title["location"], "left".into());
        assert_eq!(title["pad"], 3.0.into());
        assert_eq!(title["size"], "x-large".into());
    }

    #[test]
    fn test_update_params_ignores_unknown() {
        let mut theme = Theme::default();
        theme.update_params(
            Category::Lines,
            [("width", Some(2.0.into())), ("color", Some("red".into())), ("style", None)],
        );
        let lines = theme.params().get(Category::Lines).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines["width"], 2.0.into());
    }

    #[test]
    fn test_font_list_normalized() {
        let mut theme = Theme::default();
        theme.set_font(
            args::Fonts::new()
                .with_serif("Noto Serif")
                .with_sans_serif(["Fira Sans", "Noto Sans"])
                .with_family("gothic"),
        );
        assert_eq!(
            theme.param(Category::Fonts, "serif"),
            Some(&vec!["Noto Serif"].into())
        );
        assert_eq!(
            theme.param(Category::Fonts, "sans-serif"),
            Some(&vec!["Fira Sans", "Noto Sans"].into())
        );
        assert_eq!(theme.param(Category::Fonts, "family"), None);
    }

    #[test]
    fn test_palette_becomes_cycle() {
        let mut theme = Theme::default();
        theme.set_color(args::Colors::new().with_palette(["#111111", "#222222"]));
        let mut store = MemoryStore::default();
        theme.apply(&mut store);
        assert_eq!(
            store.get("axes.prop_cycle"),
            Some(Value::Cycle(rc::Cycle::color(vec![
                "#111111".into(),
                "#222222".into()
            ])))
        );
    }

    #[test]
    fn test_overrides_win() {
        let mut theme = Theme::default();
        theme
            .set_lines(args::Lines::new().with_width(3.0))
            .set_overrides([("lines.linewidth", 5.0), ("lines.markersize", 2.0)]);

        let mut store = MemoryStore::default();
        theme.apply(&mut store);
        assert_eq!(store.get("lines.linewidth"), Some(Value::Number(5.0)));
        assert_eq!(store.get("lines.markersize"), Some(Value::Number(2.0)));
    }

    #[test]
    fn test_set_overrides_replaces() {
        let mut theme = Theme::default();
        theme.set_overrides([("a", 1)]);
        theme.set_overrides([("b", 2)]);
        assert_eq!(theme.overrides().len(), 1);
        assert!(theme.overrides().contains_key("b"));
    }

    #[test]
    fn test_apply_resets_first() {
        let mut store = MemoryStore::default();
        store.set("axes.grid", Value::Bool(true));
        store.set("lines.linewidth", Value::Number(9.0));

        let mut theme = Theme::default();
        theme.set_grid(args::Grid::new().with_alpha(0.5));
        theme.apply(&mut store);

        assert_eq!(store.get("axes.grid"), Some(Value::Bool(false)));
        assert_eq!(store.get("lines.linewidth"), Some(Value::Number(1.5)));
        assert_eq!(store.get("grid.alpha"), Some(Value::Number(0.5)));
    }

    #[test]
    fn test_apply_idempotent() {
        let mut theme = Theme::default();
        theme
            .set_grid(args::Grid::new().with_draw(true).with_style("--"))
            .set_overrides([("font.size", 14.0)]);

        let mut once = MemoryStore::default();
        theme.apply(&mut once);
        let mut twice = MemoryStore::default();
        theme.apply(&mut twice);
        theme.apply(&mut twice);
        assert_eq!(once.get_all(), twice.get_all());
    }

    #[test]
    fn test_resolve_matches_apply() {
        let mut theme = Theme::default();
        theme
            .set_ticks(args::Ticks::new().with_direction("in").with_y_align("top"))
            .set_overrides([("xtick.direction", "inout")]);

        let resolved = theme.resolve();
        assert_eq!(resolved["xtick.direction"], Value::Text("inout".into()));
        assert_eq!(resolved["ytick.direction"], Value::Text("in".into()));
        assert_eq!(resolved["ytick.alignment"], Value::Text("top".into()));

        let mut store = MemoryStore::default();
        theme.apply(&mut store);
        for (key, value) in resolved {
            assert_eq!(store.get(&key), Some(value));
        }
    }

    #[test]
    fn test_set_transforms() {
        let mut theme = Theme::default();
        theme.set_transforms(true, Some(10.0));
        assert!(theme.transforms().trim.is_some());
        assert_eq!(theme.transforms().offset.map(|o| o.distance), Some(10.0));

        theme.set_transforms(false, None);
        assert!(theme.transforms().is_empty());
    }

    #[test]
    fn test_json_layout() {
        let mut theme = Theme::new("n", "d");
        theme
            .set_grid(args::Grid::new().with_draw(true))
            .set_transforms(true, Some(5.0));
        let json: serde_json::Value = serde_json::from_str(&theme.to_json()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "info": {"name": "n", "description": "d"},
                "params": {"grid": {"draw": true}},
                "overrides": {},
                "transforms": {"trim": {}, "offset": {"distance": 5.0}},
            })
        );
        assert!(theme.to_json().contains("\n    \"info\": {\n        \"name\""));
        assert_eq!(theme.to_string(), theme.to_json());
    }

    #[test]
    fn test_dict_round_trip() {
        let mut theme = Theme::new("round", "trip");
        theme
            .set_title(args::Title::new().with_size(14.5).with_weight(600))
            .set_font(args::Fonts::new().with_monospace("Fira Code"))
            .set_color(args::Colors::new().with_palette(["red", "green"]))
            .set_tick_labels(args::TickLabels::new().with_top(true))
            .set_overrides([("legend.frameon", false)])
            .set_transforms(false, Some(3.0));

        let back = Theme::from_dict(theme.to_dict()).unwrap();
        assert_eq!(back, theme);
        let back = Theme::from_json(&theme.to_json()).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_from_dict_defaults_missing_fields() {
        let theme = Theme::from_dict(serde_json::json!({
            "params": {"lines": {"width": 2}},
            "future_field": 42,
        }))
        .unwrap();
        assert_eq!(theme.info(), &Info::default());
        assert_eq!(theme.param(Category::Lines, "width"), Some(&2.0.into()));
        assert!(theme.overrides().is_empty());
        assert!(theme.transforms().is_empty());

        let theme = Theme::from_dict(serde_json::json!({})).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_load_normalizes_params() {
        let theme = Theme::from_json(
            r#"{
                "params": {
                    "ticks": {"y_align:": "baseline", "bogus": 1},
                    "grid": {"axis": "diagonal", "alpha": 0.3},
                    "fonts": {"serif": "Noto Serif"},
                    "nonsense": {"a": 1}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            theme.param(Category::Ticks, "y_align"),
            Some(&"baseline".into())
        );
        assert_eq!(theme.params().get(Category::Ticks).unwrap().len(), 1);
        assert_eq!(theme.param(Category::Grid, "axis"), None);
        assert_eq!(theme.param(Category::Grid, "alpha"), Some(&0.3.into()));
        assert_eq!(
            theme.param(Category::Fonts, "serif"),
            Some(&vec!["Noto Serif"].into())
        );
        assert_eq!(theme.params().iter().count(), 3);
    }

    #[test]
    fn test_malformed_json() {
        let err = Theme::from_json("{ \"info\": ").unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }
}
