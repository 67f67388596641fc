//! Post-render transforms
//!
//! Transforms operate on the geometry of a rendered [`Figure`]: they read the live
//! view limits and ticks of every axes and move or clip the spines accordingly.
//! They are not configuration values and run only once the figure is drawn.
use std::fmt;

use plotheme_base::{Axes, Axis, Figure, Side, SpinePosition};
use serde::{Deserialize, Serialize};

/// Which axis of an axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    /// The x axis
    X,
    /// The y axis
    Y,
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dir::X => f.write_str("x"),
            Dir::Y => f.write_str("y"),
        }
    }
}

/// Errors of the post-render transforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// No major tick lies within the view limits of an axis that has minor ticks,
    /// so there is nothing to trim the spine to.
    NoMajorTickInView {
        /// Index of the axes in the figure
        axes: usize,
        /// The offending axis
        axis: Dir,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoMajorTickInView { axes, axis } => write!(
                f,
                "Cannot trim {} axis of axes #{}: no major tick within the view limits",
                axis, axes
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Arguments of the trim transform (none)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trim {}

/// Arguments of the offset transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Outward displacement of the spines, in points
    pub distance: f32,
}

/// The post-render transforms of a theme.
///
/// Serialized as an object keyed by transform name, where absent entries are omitted:
/// `{"trim": {}, "offset": {"distance": 10.0}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transforms {
    /// Trim the spines to the outermost major ticks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<Trim>,
    /// Move the spines outward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
}

impl Transforms {
    /// Build the transforms from the convenience arguments
    pub fn new(trim: bool, offset: Option<f32>) -> Self {
        Transforms {
            trim: trim.then_some(Trim {}),
            offset: offset.map(|distance| Offset { distance }),
        }
    }

    /// Whether there is no transform to run
    pub fn is_empty(&self) -> bool {
        self.trim.is_none() && self.offset.is_none()
    }

    /// Run the transforms on every axes of the figure, trim first.
    pub fn apply(&self, fig: &mut Figure) -> Result<(), Error> {
        if self.trim.is_some() {
            trim(fig)?;
        }
        if let Some(Offset { distance }) = self.offset {
            offset(fig, distance);
        }
        Ok(())
    }
}

/// Span of major ticks an axis spine is trimmed to.
/// `Ok(None)` if the axis has no minor ticks and is left untouched.
fn trim_span(axis: &Axis) -> Result<Option<(f64, f64)>, ()> {
    if axis.minor_ticks().is_empty() {
        return Ok(None);
    }
    let (a, b) = axis.limits();
    let (lo, hi) = (a.min(b), a.max(b));

    let first = axis.major_ticks().iter().copied().find(|t| *t >= lo);
    let last = axis.major_ticks().iter().copied().rev().find(|t| *t <= hi);
    match (first, last) {
        (Some(first), Some(last)) if first <= last => Ok(Some((first, last))),
        _ => Err(()),
    }
}

fn trim_axis(axes: &mut Axes, dir: Dir, (low, high): (f64, f64)) {
    let (axis, sides) = match dir {
        Dir::X => (axes.x_mut(), [Side::Bottom, Side::Top]),
        Dir::Y => (axes.y_mut(), [Side::Left, Side::Right]),
    };
    let minor = axis
        .minor_ticks()
        .iter()
        .copied()
        .filter(|t| *t >= low && *t <= high)
        .collect();
    axis.set_minor_ticks(minor);
    for side in sides {
        axes.spines_mut()[side].set_bounds(low, high);
    }
}

/// Trim the spines of every axes to the span of their outermost major ticks,
/// and drop the minor ticks outside that span.
///
/// Axes are processed independently for x and y. An axis without minor ticks is left untouched.
/// Nothing is modified if the trim fails for any axis.
pub fn trim(fig: &mut Figure) -> Result<(), Error> {
    let mut spans = Vec::with_capacity(fig.axes().len());
    for (idx, axes) in fig.axes().iter().enumerate() {
        let x = trim_span(axes.x()).map_err(|_| Error::NoMajorTickInView {
            axes: idx,
            axis: Dir::X,
        })?;
        let y = trim_span(axes.y()).map_err(|_| Error::NoMajorTickInView {
            axes: idx,
            axis: Dir::Y,
        })?;
        spans.push((x, y));
    }

    for (axes, (x, y)) in fig.axes_mut().iter_mut().zip(spans) {
        if let Some(span) = x {
            log::trace!("trimming x spines to [{}, {}]", span.0, span.1);
            trim_axis(axes, Dir::X, span);
        }
        if let Some(span) = y {
            log::trace!("trimming y spines to [{}, {}]", span.0, span.1);
            trim_axis(axes, Dir::Y, span);
        }
    }
    Ok(())
}

/// Move the four spines of every axes outward by `distance` points
pub fn offset(fig: &mut Figure, distance: f32) {
    for axes in fig.axes_mut() {
        for side in Side::ALL {
            axes.spines_mut()[side].set_position(SpinePosition::Outward(distance));
        }
    }
}

/// Rotate the x tick labels of every axes
pub fn rotate_x_labels(fig: &mut Figure, degrees: f32) {
    for axes in fig.axes_mut() {
        axes.x_mut().set_label_rotation(degrees);
    }
}

/// Rotate the y tick labels of every axes
pub fn rotate_y_labels(fig: &mut Figure, degrees: f32) {
    for axes in fig.axes_mut() {
        axes.y_mut().set_label_rotation(degrees);
    }
}
