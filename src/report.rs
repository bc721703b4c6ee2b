//! Accuracy and convergence comparison of trajectories.

use crate::{Float, error::Error, trajectory::Trajectory};

/// Maximum absolute deviation between a computed trajectory and a
/// reference trajectory at matching grid points.
///
/// Both trajectories must share `x0`, `h`, and length; comparing
/// misaligned grids is a precondition violation and fails fast.
pub fn max_abs_error(traj: &Trajectory, reference: &Trajectory) -> Result<Float, Error> {
    check_same_grid(traj, reference)?;
    if traj.len() != reference.len() {
        return Err(Error::LengthMismatch { expected: reference.len(), got: traj.len() });
    }

    let mut max = 0.0;
    for i in 0..traj.len() {
        max = (reference[i] - traj[i]).abs().max(max);
    }
    Ok(max)
}

/// Runge-rule error estimate from two trajectories of the same method
/// computed at step `h` (`fine`) and `2h` (`coarse`).
///
/// Takes the maximum of `|coarse[i] - fine[2i]| / divisor` over the
/// indices valid in the coarser trajectory. The divisor is
/// method-specific; see [`runge_divisor`].
pub fn runge_estimate(
    fine: &Trajectory,
    coarse: &Trajectory,
    divisor: Float,
) -> Result<Float, Error> {
    if fine.x0() != coarse.x0() {
        return Err(Error::GridMismatch { expected: fine.x0(), got: coarse.x0() });
    }
    let expected_h = 2.0 * fine.h();
    if (coarse.h() - expected_h).abs() > 1e-9 * expected_h.abs() {
        return Err(Error::GridMismatch { expected: expected_h, got: coarse.h() });
    }

    let mut max: Float = 0.0;
    for i in 0..coarse.len() {
        if 2 * i >= fine.len() {
            break;
        }
        max = max.max((coarse[i] - fine[2 * i]).abs() / divisor);
    }
    Ok(max)
}

/// Step-doubling divisor `2^order - 1` for a method of the given order
/// of accuracy (3 for the trapezoidal rule, 15 for RK4).
pub fn runge_divisor(order: u32) -> Float {
    ((1u32 << order) - 1) as Float
}

fn check_same_grid(left: &Trajectory, right: &Trajectory) -> Result<(), Error> {
    if left.x0() != right.x0() {
        return Err(Error::GridMismatch { expected: right.x0(), got: left.x0() });
    }
    if left.h() != right.h() {
        return Err(Error::GridMismatch { expected: right.h(), got: left.h() });
    }
    Ok(())
}
