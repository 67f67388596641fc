#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # plotheme
 * _declarative plotting themes_.
 *
 * Plotheme maps a small set of human-friendly style attributes (title, grid, lines, fonts,
 * colors, axes, ticks, labels) onto the global configuration of a plotting library,
 * stores them as JSON theme files, and applies them as a scope around plot creation.
 *
 * ## Get started
 *
 * ```
 * use plotheme::{Session, Theme};
 * use plotheme::theme::args;
 * use plotheme::{Axes, Axis};
 *
 * let mut theme = Theme::new("floating", "Floating axes on a dotted grid");
 * theme
 *     .set_grid(args::Grid::new().with_draw(true).with_style(":"))
 *     .set_color(args::Colors::new().with_palette(["#4c72b0", "#dd8452"]))
 *     .set_axes(args::Axes::new().with_top(false).with_right(false))
 *     .set_transforms(true, Some(10.0));
 *
 * // The session stands for the plotting library: configuration and current figure.
 * let mut session = Session::new();
 * theme
 *     .scoped(&mut session, |session| {
 *         // draw as usual: here the figure geometry is built by hand
 *         let fig = session.figure();
 *         fig.add_axes(Axes::new(
 *             Axis::new((0.0, 10.0))
 *                 .with_major_ticks(vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0])
 *                 .with_minor_ticks(vec![1.0, 3.0, 5.0, 7.0, 9.0]),
 *             Axis::new((-1.0, 1.0))
 *                 .with_major_ticks(vec![-1.0, 0.0, 1.0])
 *                 .with_minor_ticks(vec![-0.5, 0.5]),
 *         ));
 *     })
 *     .unwrap();
 *
 * // at scope exit, the configuration is restored and the spines are trimmed and offset
 * let axes = &session.current_figure().unwrap().axes()[0];
 * assert_eq!(axes.spine(plotheme::Side::Left).outward(), 10.0);
 * ```
 *
 * ## Theme files
 *
 * ```json
 * {
 *     "info": {"name": "...", "description": "..."},
 *     "params": {"grid": {"draw": true}},
 *     "overrides": {"legend.frameon": false},
 *     "transforms": {"trim": {}, "offset": {"distance": 10.0}}
 * }
 * ```
 *
 * Missing fields default and unknown fields are ignored.
 * See [`Theme::save`], [`Theme::from_file`] and the [`registry`] module.
 *
 * ## Crate features
 *
 *  - `bundled-themes` (default): embeds a few themes in the library, see [`list_themes`] and [`load_theme`].
 */
// Plotheme is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

use std::fmt;

pub mod context;
pub mod rc;
pub mod registry;
pub mod theme;
pub mod transform;

pub use context::{Activation, Context, Session};
pub use plotheme_base::{Axes, Axis, Figure, Side, Spine, SpinePosition};
pub use registry::Registry;
#[cfg(feature = "bundled-themes")]
pub use registry::{list_themes, load_theme};
pub use theme::{Category, Theme};
pub use transform::Transforms;

/// Errors of theme loading, saving and activation
#[derive(Debug)]
pub enum Error {
    /// No theme is registered under the requested name
    ThemeNotFound {
        /// The requested name
        name: String,
        /// The names that are registered
        available: Vec<String>,
    },
    /// Malformed theme JSON
    Parse(serde_json::Error),
    /// Theme file could not be read or written
    Io(std::io::Error),
    /// A post-render transform failed
    Transform(transform::Error),
}

/// Result type of plotheme
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<transform::Error> for Error {
    fn from(err: transform::Error) -> Self {
        Error::Transform(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ThemeNotFound { name, available } => {
                write!(f, "No theme named '{}' found.", name)?;
                if available.is_empty() {
                    write!(f, " No theme available.")
                } else {
                    write!(f, " Available themes: {}", available.join(", "))
                }
            }
            Error::Parse(err) => write!(f, "Malformed theme: {}", err),
            Error::Io(err) => err.fmt(f),
            Error::Transform(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ThemeNotFound { .. } => None,
            Error::Parse(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Transform(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::ThemeNotFound {
            name: "nope".into(),
            available: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            err.to_string(),
            "No theme named 'nope' found. Available themes: a, b"
        );
        let err = Error::ThemeNotFound {
            name: "nope".into(),
            available: vec![],
        };
        assert_eq!(
            err.to_string(),
            "No theme named 'nope' found. No theme available."
        );
    }
}
