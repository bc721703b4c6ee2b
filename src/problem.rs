//! The fixed test problem: a Bernoulli equation with a known closed form.

use crate::{
    Float,
    ode::{Jacobian, ODE},
};

/// Left interval bound.
pub const X0: Float = 1.0;
/// Right interval bound.
pub const XEND: Float = 2.0;
/// Nominal step size.
pub const H: Float = 0.1;
/// Initial value u(X0).
pub const U0: Float = 0.5;
/// Newton iteration tolerance for the implicit method.
pub const NEWTON_TOL: Float = 1e-7;

/// The Bernoulli equation `u' = (u^2 ln x - u) / x`.
///
/// Defined for `x > 0` only; callers must not evaluate the right-hand
/// side, its derivative, or the closed form at `x <= 0`. With
/// `u(1) = 1/2` the closed-form solution is `u(x) = 1 / (ln x + x + 1)`.
pub struct Bernoulli;

impl Bernoulli {
    /// Closed-form solution through `(X0, U0)`.
    pub fn reference(x: Float) -> Float {
        1.0 / (x.ln() + x + 1.0)
    }
}

impl ODE for Bernoulli {
    fn ode(&self, x: Float, u: Float) -> Float {
        (u * u * x.ln() - u) / x
    }
}

impl Jacobian for Bernoulli {
    fn dfdu(&self, x: Float, u: Float) -> Float {
        (2.0 * u * x.ln() - 1.0) / x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_passes_through_the_initial_value() {
        // ln(1) = 0, so u(1) = 1/2 exactly.
        assert_eq!(Bernoulli::reference(X0), U0);
    }

    #[test]
    fn reference_satisfies_the_equation() {
        // Central difference of the closed form against the right-hand side.
        let e = 1e-6;
        for &x in &[1.2, 1.5, 1.9] {
            let du = (Bernoulli::reference(x + e) - Bernoulli::reference(x - e)) / (2.0 * e);
            let rhs = Bernoulli.ode(x, Bernoulli::reference(x));
            assert!((du - rhs).abs() < 1e-5, "residual {} at x = {}", (du - rhs).abs(), x);
        }
    }

    #[test]
    fn dfdu_matches_a_finite_difference_of_f() {
        let e = 1e-6;
        for &(x, u) in &[(1.1, 0.5), (1.5, 0.3), (2.0, 0.27)] {
            let fd = (Bernoulli.ode(x, u + e) - Bernoulli.ode(x, u - e)) / (2.0 * e);
            let an = Bernoulli.dfdu(x, u);
            assert!((fd - an).abs() < 1e-5, "residual {} at ({}, {})", (fd - an).abs(), x, u);
        }
    }
}
