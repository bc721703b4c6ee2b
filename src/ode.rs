//! User-supplied ODE right-hand side.

use crate::Float;

/// Scalar first-order ODE `u' = f(x, u)`.
///
/// Implement this trait for your problem to provide the right-hand side
/// function. The integrators repeatedly call `ode` with the current
/// abscissa `x` and state `u` and expect the derivative value back.
///
/// # Example
///
/// ```ignore
/// struct Decay;
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, u: f64) -> f64 {
///         -u
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, u: Float) -> Float;
}

/// Partial derivative of the right-hand side with respect to `u`.
///
/// Required by the implicit trapezoidal method, whose Newton corrector
/// differentiates the update equation in `u`.
pub trait Jacobian: ODE {
    fn dfdu(&self, x: Float, u: Float) -> Float;
}
