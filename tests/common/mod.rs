//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use odestep::prelude::*;

/// Exponential decay `u' = -u`, closed form `u(x) = u0 * e^{-(x - x0)}`.
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _x: f64, u: f64) -> f64 {
        -u
    }
}

impl Jacobian for Decay {
    fn dfdu(&self, _x: f64, _u: f64) -> f64 {
        -1.0
    }
}

pub fn settings() -> Settings {
    Settings::builder().build()
}
