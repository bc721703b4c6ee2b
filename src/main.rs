//! Run the three fixed-step methods on the Bernoulli test equation,
//! print the per-grid-point comparison against the closed form, and
//! write each method's columns for external plotting.

use odestep::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let f = Bernoulli;
    let settings = Settings::builder().build();

    let reference = Trajectory::sample(Bernoulli::reference, X0, XEND, H)?;
    let trap = trapezoid(&f, X0, XEND, U0, H, &settings)?;
    let runge = rk4(&f, X0, XEND, U0, H, &settings)?;
    let adams = adams4(&f, X0, XEND, U0, H, &settings)?;

    // Step-doubled runs for the Runge-rule estimates.
    let trap2 = trapezoid(&f, X0, XEND, U0, 2.0 * H, &settings)?;
    let runge2 = rk4(&f, X0, XEND, U0, 2.0 * H, &settings)?;

    for i in 0..reference.len() {
        println!(
            "{} {:.6} {:.6} {:.6} {:.6} {:.6}",
            i,
            reference.x(i),
            reference[i],
            trap[i],
            runge[i],
            adams[i]
        );
    }

    export_columns(&trap, "trap.txt")?;
    export_columns(&runge, "runge.txt")?;
    export_columns(&adams, "adams.txt")?;

    let max_trap = max_abs_error(&trap, &reference)?;
    let max_runge = max_abs_error(&runge, &reference)?;
    let max_adams = max_abs_error(&adams, &reference)?;
    println!("max(abs(u(xi) - yi)): {:.3e} {:.3e} {:.3e}", max_trap, max_runge, max_adams);

    let est_trap = runge_estimate(&trap, &trap2, runge_divisor(TRAPEZOID_ORDER))?;
    let est_runge = runge_estimate(&runge, &runge2, runge_divisor(RK4_ORDER))?;
    println!("Runge rule: {:.3e} {:.3e}", est_trap, est_runge);

    Ok(())
}
