//! Settings for numerical integrators

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug)]
/// Settings for the fixed-step integrators
pub struct Settings {
    /// Newton iteration tolerance for the implicit trapezoidal corrector.
    #[builder(default = 1e-7)]
    pub newton_tol: Float,
    /// Max number of iterations in the Newton solver.
    #[builder(default = 50)]
    pub newton_maxiter: usize,
    /// Maximum number of allowed steps. Default is 100,000.
    #[builder(default = 100_000)]
    pub nmax: usize,
}
