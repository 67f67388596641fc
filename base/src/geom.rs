/*!
 * Geometry of rendered figures.
 *
 * Values along an axis are in data coordinates.
 * Spine offsets are in points.
 */

/// One of the four sides of an axes frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top side
    Top,
    /// Right side
    Right,
    /// Bottom side
    Bottom,
    /// Left side
    Left,
}

impl Side {
    /// All sides, in the order top, right, left, bottom
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Left, Side::Bottom];
}

/// Where a spine is placed relatively to the plot area
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpinePosition {
    /// On the plot frame (default)
    #[default]
    Frame,
    /// Moved outward from the plot area by the given distance in points
    Outward(f32),
}

/// A spine, i.e. the line drawn along one side of an axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spine {
    bounds: Option<(f64, f64)>,
    position: SpinePosition,
}

impl Spine {
    /// The bounds of the spine in data coordinates.
    /// `None` means the spine spans the full view
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Restrict the visible part of the spine to the given bounds
    pub fn set_bounds(&mut self, low: f64, high: f64) {
        self.bounds = Some((low, high));
    }

    /// The position of the spine
    pub fn position(&self) -> SpinePosition {
        self.position
    }

    /// Set the position of the spine
    pub fn set_position(&mut self, position: SpinePosition) {
        self.position = position;
    }

    /// The outward offset of the spine in points (zero if on the frame)
    pub fn outward(&self) -> f32 {
        match self.position {
            SpinePosition::Frame => 0.0,
            SpinePosition::Outward(d) => d,
        }
    }
}

/// The four spines of an axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spines {
    top: Spine,
    right: Spine,
    bottom: Spine,
    left: Spine,
}

impl std::ops::Index<Side> for Spines {
    type Output = Spine;

    fn index(&self, side: Side) -> &Spine {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

impl std::ops::IndexMut<Side> for Spines {
    fn index_mut(&mut self, side: Side) -> &mut Spine {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

/// An axis: view limits and tick positions
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    limits: (f64, f64),
    major: Vec<f64>,
    minor: Vec<f64>,
    label_rotation: f32,
}

impl Axis {
    /// Build an axis with the given view limits and no ticks
    pub fn new(limits: (f64, f64)) -> Self {
        Axis {
            limits,
            major: Vec::new(),
            minor: Vec::new(),
            label_rotation: 0.0,
        }
    }

    /// Set the major ticks and return self for chaining
    pub fn with_major_ticks(self, major: Vec<f64>) -> Self {
        Axis { major, ..self }
    }

    /// Set the minor ticks and return self for chaining
    pub fn with_minor_ticks(self, minor: Vec<f64>) -> Self {
        Axis { minor, ..self }
    }

    /// The view limits, as given (not necessarily ordered)
    pub fn limits(&self) -> (f64, f64) {
        self.limits
    }

    /// Positions of the major ticks
    pub fn major_ticks(&self) -> &[f64] {
        &self.major
    }

    /// Positions of the minor ticks
    pub fn minor_ticks(&self) -> &[f64] {
        &self.minor
    }

    /// Replace the minor ticks
    pub fn set_minor_ticks(&mut self, minor: Vec<f64>) {
        self.minor = minor;
    }

    /// Rotation of the tick labels in degrees
    pub fn label_rotation(&self) -> f32 {
        self.label_rotation
    }

    /// Set the rotation of the tick labels in degrees
    pub fn set_label_rotation(&mut self, degrees: f32) {
        self.label_rotation = degrees;
    }
}

/// A set of axes (a subplot)
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    x: Axis,
    y: Axis,
    spines: Spines,
}

impl Axes {
    /// Build axes from x and y axis
    pub fn new(x: Axis, y: Axis) -> Self {
        Axes {
            x,
            y,
            spines: Spines::default(),
        }
    }

    /// The x axis
    pub fn x(&self) -> &Axis {
        &self.x
    }

    /// The y axis
    pub fn y(&self) -> &Axis {
        &self.y
    }

    /// The x axis, mutable
    pub fn x_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    /// The y axis, mutable
    pub fn y_mut(&mut self) -> &mut Axis {
        &mut self.y
    }

    /// The spines
    pub fn spines(&self) -> &Spines {
        &self.spines
    }

    /// The spines, mutable
    pub fn spines_mut(&mut self) -> &mut Spines {
        &mut self.spines
    }

    /// The spine on the given side
    pub fn spine(&self, side: Side) -> &Spine {
        &self.spines[side]
    }
}

/// A rendered figure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    axes: Vec<Axes>,
}

impl Figure {
    /// Build an empty figure
    pub fn new() -> Self {
        Figure::default()
    }

    /// Add axes and return self for chaining
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes.push(axes);
        self
    }

    /// Add axes, and return the index of the new axes
    pub fn add_axes(&mut self, axes: Axes) -> usize {
        self.axes.push(axes);
        self.axes.len() - 1
    }

    /// All axes of the figure
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// All axes of the figure, mutable
    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }
}
