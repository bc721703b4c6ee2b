//! A library of fixed-step numerical methods for solving initial value problems (IVPs)
//! for scalar ordinary differential equations (ODEs).
//!
//! Three independent integrators share one uniform-grid convention:
//! the implicit trapezoidal rule (Newton-corrected), the classical
//! 4th-order Runge-Kutta method, and the 4th-order Adams-Bashforth-Moulton
//! predictor-corrector. [`report`] compares their trajectories against a
//! closed-form solution and estimates errors via Runge's step-halving rule.

mod error;
mod ode;
mod settings;
mod trajectory;

pub mod export;
pub mod methods;
pub mod prelude;
pub mod problem;
pub mod report;

pub use error::Error;
pub use ode::{Jacobian, ODE};
pub use settings::Settings;
pub use trajectory::Trajectory;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
