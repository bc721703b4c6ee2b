//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odestep::prelude::*;
//! ```

pub use crate::{
    Error, Float, Jacobian, ODE, Settings, Trajectory,
    export::{export_columns, write_columns},
    methods::{RK4_ORDER, TRAPEZOID_ORDER, adams4, rk4, trapezoid},
    problem::{Bernoulli, H, U0, X0, XEND},
    report::{max_abs_error, runge_estimate, runge_divisor},
};
