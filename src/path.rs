//! Path commands and their SVG `d` attribute serialization.
//!
//! [`PathData`] is a plain command list with a fluent builder, in the same
//! shape as the SVG path grammar: `M`, `L`, `H`, `V`, `A` and `Z`, all absolute.
//! Arcs are always circular, unrotated and short (`large-arc = 0`), which is
//! everything the glyph builders need.

use std::fmt;

use glam::{DVec2, dvec2};

/// Tolerance below which a closing segment is considered zero-length.
const CLOSE_EPSILON: f64 = 1e-9;

/// A single absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    HorizontalLineTo { x: f64 },
    VerticalLineTo { y: f64 },
    /// Circular arc; `sweep` is the SVG sweep flag (true = positive angle).
    ArcTo { radius: f64, sweep: bool, x: f64, y: f64 },
    ClosePath,
}

impl PathCommand {
    /// Whether this command draws a segment of its own (close excluded).
    pub fn is_drawing(self) -> bool {
        !matches!(self, PathCommand::MoveTo { .. } | PathCommand::ClosePath)
    }
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to (x, y), starting a new subpath
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    /// Straight line to (x, y)
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Horizontal line to x
    pub fn h(mut self, x: f64) -> Self {
        self.commands.push(PathCommand::HorizontalLineTo { x });
        self
    }

    /// Vertical line to y
    pub fn v(mut self, y: f64) -> Self {
        self.commands.push(PathCommand::VerticalLineTo { y });
        self
    }

    /// Circular arc of `radius` to (x, y)
    pub fn a(mut self, radius: f64, sweep: bool, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::ArcTo { radius, sweep, x, y });
        self
    }

    /// Close the current subpath
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::ClosePath);
        self
    }

    /// Move to a point
    pub fn m_to(self, p: DVec2) -> Self {
        self.m(p.x, p.y)
    }

    /// Append every command of `other`.
    pub fn append(&mut self, other: PathData) {
        self.commands.extend(other.commands);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo { .. }))
            .count()
    }

    /// True when every subpath ends with `ClosePath`.
    pub fn is_closed(&self) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let mut open = false;
        for command in &self.commands {
            match command {
                PathCommand::MoveTo { .. } if open => return false,
                PathCommand::MoveTo { .. } => open = true,
                PathCommand::ClosePath => open = false,
                _ => open = true,
            }
        }
        !open
    }

    /// The current point after each command, following SVG semantics:
    /// `H`/`V` keep the other coordinate and `Z` returns to the subpath start.
    ///
    /// Commands before the first `MoveTo` are walked from `start`.
    pub fn vertices_from(&self, start: DVec2) -> Vec<DVec2> {
        let mut current = start;
        let mut subpath_start = start;
        let mut out = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            current = match *command {
                PathCommand::MoveTo { x, y } => {
                    subpath_start = dvec2(x, y);
                    subpath_start
                }
                PathCommand::LineTo { x, y } | PathCommand::ArcTo { x, y, .. } => dvec2(x, y),
                PathCommand::HorizontalLineTo { x } => dvec2(x, current.y),
                PathCommand::VerticalLineTo { y } => dvec2(current.x, y),
                PathCommand::ClosePath => subpath_start,
            };
            out.push(current);
        }
        out
    }

    /// [`vertices_from`](Self::vertices_from) the origin.
    pub fn vertices(&self) -> Vec<DVec2> {
        self.vertices_from(DVec2::ZERO)
    }

    /// Current point after the last command.
    pub fn end_point(&self) -> Option<DVec2> {
        self.vertices().last().copied()
    }

    /// Explicit drawing commands (`L`, `H`, `V`, `A`); closes are not counted.
    pub fn drawn_segments(&self) -> usize {
        self.commands.iter().filter(|c| c.is_drawing()).count()
    }

    /// Segments of the contour: drawing commands plus every `ClosePath` that
    /// draws a non-zero segment back to its subpath start.
    pub fn contour_segments(&self) -> usize {
        let vertices = self.vertices();
        let mut count = 0;
        for (i, command) in self.commands.iter().enumerate() {
            match command {
                PathCommand::MoveTo { .. } => {}
                PathCommand::ClosePath => {
                    let before = if i == 0 { DVec2::ZERO } else { vertices[i - 1] };
                    if before.distance(vertices[i]) > CLOSE_EPSILON {
                        count += 1;
                    }
                }
                _ => count += 1,
            }
        }
        count
    }

    /// Bounds of the vertices as `(min, max)`. Arc bulges are not included.
    pub fn vertex_bounds(&self) -> Option<(DVec2, DVec2)> {
        let vertices = self.vertices();
        let first = *vertices.first()?;
        Some(
            vertices
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M{} {}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => write!(f, "L{} {}", fmt_num(x), fmt_num(y)),
            PathCommand::HorizontalLineTo { x } => write!(f, "H{}", fmt_num(x)),
            PathCommand::VerticalLineTo { y } => write!(f, "V{}", fmt_num(y)),
            PathCommand::ArcTo { radius, sweep, x, y } => {
                let r = fmt_num(radius);
                write!(f, "A{r} {r} 0 0 {} {} {}", u8::from(sweep), fmt_num(x), fmt_num(y))
            }
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Format a coordinate as a plain decimal with 10 significant figures,
/// trailing zeros trimmed. Never uses exponent notation.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 10)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    // The scale overflows for tiny values; `{:.prec$}` rounds those on its own
    let rounded = if scale.is_finite() { (value * scale).round() / scale } else { value };
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
