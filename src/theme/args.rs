//! Arguments of the theme setters
//!
//! Each structure gathers the optional attributes of one [`Category`].
//! Attributes left unset are not touched by the setter.
//! Values are validated when they are handed to the theme, not here:
//! an invalid value is silently dropped.
//!
//! ```
//! use plotheme::Theme;
//! use plotheme::theme::args;
//!
//! let mut theme = Theme::new("dots", "Dotted grid");
//! theme
//!     .set_grid(args::Grid::new().with_draw(true).with_style(":"))
//!     .set_lines(args::Lines::new().with_width(2.0));
//! ```
use super::schema::{Category, ParamValue};

/// Arguments of a setter for one category
pub trait Args {
    /// The category the arguments belong to
    const CATEGORY: Category;

    /// The attributes as `(name, value)` pairs, unset ones included
    fn into_entries(self) -> Vec<(&'static str, Option<ParamValue>)>;
}

macro_rules! define_args {
    (
        $(#[$meta:meta])*
        $name:ident: $cat:expr => {
            $(
                $(#[$fmeta:meta])*
                $field:ident, $setter:ident => $attr:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $field: Option<ParamValue>, )*
        }

        impl $name {
            /// Build arguments with every attribute unset
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $setter(self, value: impl Into<ParamValue>) -> Self {
                    Self {
                        $field: Some(value.into()),
                        ..self
                    }
                }
            )*
        }

        impl Args for $name {
            const CATEGORY: Category = $cat;

            fn into_entries(self) -> Vec<(&'static str, Option<ParamValue>)> {
                vec![ $( ($attr, self.$field), )* ]
            }
        }
    };
}

define_args! {
    /// Axes title styling
    Title: Category::Title => {
        /// Location of the title, one of left, right, center, top, bottom
        location, with_location => "location",
        /// Pad between axes and title in points
        pad, with_pad => "pad",
        /// Font size, a number or a relative size such as "large"
        size, with_size => "size",
        /// Font weight, a number in 0..=1000 or a name such as "bold"
        weight, with_weight => "weight",
    }
}

define_args! {
    /// Grid styling
    Grid: Category::Grid => {
        /// Whether the grid is drawn
        draw, with_draw => "draw",
        /// Axis along which the grid is drawn, one of both, x, y
        axis, with_axis => "axis",
        /// Tick level the grid is based on, one of major, minor, both
        ticks, with_ticks => "ticks",
        /// Opacity of grid lines
        alpha, with_alpha => "alpha",
        /// Line style, one of "-", "--", "-.", ":", ""
        style, with_style => "style",
        /// Line width in points
        width, with_width => "width",
    }
}

define_args! {
    /// Line styling
    Lines: Category::Lines => {
        /// Line style, one of "-", "--", "-.", ":", ""
        style, with_style => "style",
        /// Line width in points
        width, with_width => "width",
    }
}

define_args! {
    /// Font styling
    ///
    /// The font lists (cursive, fantasy, monospace, sans-serif, serif)
    /// accept a single name or a list of names.
    Fonts: Category::Fonts => {
        /// Generic font family, one of serif, sans-serif, monospace, cursive, fantasy
        family, with_family => "family",
        /// Fonts used for cursive text
        cursive, with_cursive => "cursive",
        /// Fonts used for fantasy text
        fantasy, with_fantasy => "fantasy",
        /// Fonts used for monospace text
        monospace, with_monospace => "monospace",
        /// Fonts used for sans-serif text
        sans_serif, with_sans_serif => "sans-serif",
        /// Fonts used for serif text
        serif, with_serif => "serif",
        /// Base font size in points
        size, with_size => "size",
        /// Font stretch
        stretch, with_stretch => "stretch",
        /// Font style
        style, with_style => "style",
        /// Font variant
        variant, with_variant => "variant",
        /// Font weight
        weight, with_weight => "weight",
    }
}

define_args! {
    /// Colors
    Colors: Category::Colors => {
        /// Colors cycled through by successive series
        palette, with_palette => "palette",
        /// Background of the whole figure
        figure_background_color, with_figure_background_color => "figure_background_color",
        /// Background of the plot area
        plot_background_color, with_plot_background_color => "plot_background_color",
        /// Color of text elements (titles, labels)
        text_color, with_text_color => "text_color",
        /// Color of the axes frame
        axes_color, with_axes_color => "axes_color",
        /// Color of the axis labels
        axis_label_color, with_axis_label_color => "axis_label_color",
        /// Default line color
        line_color, with_line_color => "line_color",
        /// Color of grid lines
        grid_color, with_grid_color => "grid_color",
        /// Color of ticks
        tick_color, with_tick_color => "tick_color",
        /// Color of tick labels
        tick_label_color, with_tick_label_color => "tick_label_color",
    }
}

define_args! {
    /// Axes frame and margins
    Axes: Category::Axes => {
        /// Frame line width
        width, with_width => "width",
        /// Whether the top spine is drawn
        top, with_top => "top",
        /// Whether the bottom spine is drawn
        bottom, with_bottom => "bottom",
        /// Whether the left spine is drawn
        left, with_left => "left",
        /// Whether the right spine is drawn
        right, with_right => "right",
        /// Padding added to the x data interval, relative to it
        xmargin, with_xmargin => "xmargin",
        /// Padding added to the y data interval, relative to it
        ymargin, with_ymargin => "ymargin",
        /// Padding added to the z data interval, relative to it
        zmargin, with_zmargin => "zmargin",
    }
}

define_args! {
    /// Ticks styling
    Ticks: Category::Ticks => {
        /// Horizontal alignment of x tick labels
        x_align, with_x_align => "x_align",
        /// Vertical alignment of y tick labels
        y_align, with_y_align => "y_align",
        /// Tick direction, one of in, out, inout
        direction, with_direction => "direction",
        /// Whether minor ticks are drawn
        draw_minor, with_draw_minor => "draw_minor",
        /// Width of major ticks
        width_major, with_width_major => "width_major",
        /// Width of minor ticks
        width_minor, with_width_minor => "width_minor",
        /// Length of major ticks
        size_major, with_size_major => "size_major",
        /// Length of minor ticks
        size_minor, with_size_minor => "size_minor",
        /// Pad between major ticks and their labels
        pad_major, with_pad_major => "pad_major",
        /// Pad between minor ticks and their labels
        pad_minor, with_pad_minor => "pad_minor",
    }
}

define_args! {
    /// Axis labels styling
    AxisLabels: Category::AxisLabels => {
        /// Pad between the axis and its label
        pad, with_pad => "pad",
        /// Relative font size
        size, with_size => "size",
        /// Font weight
        weight, with_weight => "weight",
    }
}

define_args! {
    /// Tick labels styling
    TickLabels: Category::TickLabels => {
        /// Location of the axis labels
        location, with_location => "location",
        /// Relative font size
        size, with_size => "size",
        /// Whether y tick labels are drawn on the left
        left, with_left => "left",
        /// Whether y tick labels are drawn on the right
        right, with_right => "right",
        /// Whether x tick labels are drawn at the bottom
        bottom, with_bottom => "bottom",
        /// Whether x tick labels are drawn at the top
        top, with_top => "top",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_is_in_schema() {
        fn check<A: Args + Default>() {
            let entries = A::default().into_entries();
            assert_eq!(entries.len(), A::CATEGORY.attrs().len());
            for (name, value) in entries {
                assert!(value.is_none());
                assert!(
                    A::CATEGORY.attr(name).is_some(),
                    "{}.{} not in schema",
                    A::CATEGORY,
                    name
                );
            }
        }
        check::<Title>();
        check::<Grid>();
        check::<Lines>();
        check::<Fonts>();
        check::<Colors>();
        check::<Axes>();
        check::<Ticks>();
        check::<AxisLabels>();
        check::<TickLabels>();
    }

    #[test]
    fn test_builder_sets_only_given() {
        let entries = Grid::new().with_axis("x").with_width(2).into_entries();
        let set: Vec<_> = entries.iter().filter(|(_, v)| v.is_some()).collect();
        assert_eq!(set.len(), 2);
        assert!(entries.contains(&("axis", Some("x".into()))));
        assert!(entries.contains(&("width", Some(2.0.into()))));
    }
}
