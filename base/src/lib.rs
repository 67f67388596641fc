/*!
 * # plotheme-base
 *
 * Geometry of a rendered figure, as seen by the post-render transforms of `plotheme`.
 *
 * A [`Figure`] holds a list of [`Axes`]. Each axes has an x and a y [`Axis`]
 * (view limits, major and minor ticks) and four [`Spine`]s.
 * Tick positions are placed by the plotting library and set explicitly here.
 */
// Plotheme is released under the MIT License

pub mod geom;

pub use geom::{Axes, Axis, Figure, Side, Spine, SpinePosition, Spines};
