//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float, ODE, Settings,
    error::Error,
    trajectory::{Trajectory, step_count},
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// Four right-hand-side evaluations per step, weighted 1:2:2:1. Fixed
/// work per step, no convergence loop.
pub fn rk4<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: Float,
    h: Float,
    settings: &Settings,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    let n = step_count(x0, xend, h)?;
    if n > settings.nmax {
        return Err(Error::TooManySteps { required: n, nmax: settings.nmax });
    }

    let mut y = Vec::with_capacity(n + 1);
    y.push(y0);

    for i in 1..=n {
        let xi = x0 + h * (i - 1) as Float;
        let yprev = y[i - 1];

        // Stage computations
        let k1 = f.ode(xi, yprev);
        let k2 = f.ode(xi + C2 * h, yprev + h * A21 * k1);
        let k3 = f.ode(xi + C3 * h, yprev + h * A32 * k2);
        let k4 = f.ode(xi + C4 * h, yprev + h * A43 * k3);

        y.push(yprev + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4));
    }

    Ok(Trajectory::new(x0, h, y))
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
