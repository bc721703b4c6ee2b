//! Fixed-grid solution trajectory produced by the integrators.

use std::ops::Index;

use crate::{Float, error::Error};

// Relative slack allowed when checking that (xend - x0)/h is integral.
const STEP_SLACK: Float = 1e-6;

/// An ordered sequence of solution values over a uniform grid.
///
/// `y[i]` approximates the solution at `x0 + i * h`. A trajectory is
/// produced in full by one integrator invocation and is immutable once
/// returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    x0: Float,
    h: Float,
    y: Vec<Float>,
}

impl Trajectory {
    pub(crate) fn new(x0: Float, h: Float, y: Vec<Float>) -> Self {
        Self { x0, h, y }
    }

    /// Evaluate `g` at every grid point from `x0` to `xend` with step `h`.
    ///
    /// Used to tabulate a closed-form reference solution on the same grid
    /// the integrators produce.
    pub fn sample<G>(g: G, x0: Float, xend: Float, h: Float) -> Result<Self, Error>
    where
        G: Fn(Float) -> Float,
    {
        let n = step_count(x0, xend, h)?;
        let y = (0..=n).map(|i| g(x0 + h * i as Float)).collect();
        Ok(Self { x0, h, y })
    }

    pub fn x0(&self) -> Float {
        self.x0
    }

    pub fn h(&self) -> Float {
        self.h
    }

    /// Number of grid points (steps + 1).
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Abscissa of grid point `i`, computed directly from the index so
    /// rounding does not accumulate across steps.
    pub fn x(&self, i: usize) -> Float {
        self.x0 + self.h * i as Float
    }

    /// Solution values in step order.
    pub fn y(&self) -> &[Float] {
        &self.y
    }

    /// Value at the last grid point.
    pub fn last(&self) -> Option<Float> {
        self.y.last().copied()
    }

    /// Iterate over stored `(x_i, y_i)` grid points in increasing x order.
    pub fn iter(&self) -> TrajectoryIter<'_> {
        TrajectoryIter { traj: self, i: 0 }
    }
}

impl Index<usize> for Trajectory {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.y[index]
    }
}

/// Iterator over (x, y) pairs of the grid points in a [`Trajectory`].
pub struct TrajectoryIter<'a> {
    traj: &'a Trajectory,
    i: usize,
}

impl Iterator for TrajectoryIter<'_> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.traj.len() {
            return None;
        }
        let i = self.i;
        self.i += 1;
        Some((self.traj.x(i), self.traj.y[i]))
    }
}

/// Number of whole steps of size `h` from `x0` to `xend`.
///
/// The span must divide into an integer step count (within `STEP_SLACK`
/// relative tolerance) so that every trajectory over the same interval
/// lands on index-aligned grid points.
pub(crate) fn step_count(x0: Float, xend: Float, h: Float) -> Result<usize, Error> {
    if h == 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    let span = xend - x0;
    if span != 0.0 && span.signum() != h.signum() {
        return Err(Error::InvalidStepSize(h));
    }
    let steps = span / h;
    let n = steps.round();
    if (steps - n).abs() > STEP_SLACK * steps.abs().max(1.0) {
        return Err(Error::StepCountNotIntegral { span, h });
    }
    Ok(n as usize)
}
