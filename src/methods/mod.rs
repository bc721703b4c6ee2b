//! Fixed-step integration methods

mod adams;
mod rk4;
mod trapezoid;

pub use adams::adams4;
pub use rk4::rk4;
pub use trapezoid::trapezoid;

/// Order of accuracy of the implicit trapezoidal method.
pub const TRAPEZOID_ORDER: u32 = 2;
/// Order of accuracy of the classical Runge-Kutta 4 method.
pub const RK4_ORDER: u32 = 4;
