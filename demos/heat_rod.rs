//! Cooling of a rod with both ends held at 0
//!
//! ρ·c·∂T/∂t = λ·∂²T/∂x²
//!
//! A steel rod starts at 100 everywhere inside. The profile is printed at a
//! few elapsed times together with the steady state it relaxes to.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example heat_rod
//! ```

use labsim::physics::{Material, RodProblem};
use labsim::solver::{
    DirichletBoundaries, HeatConductionSolver, Solver, SolverConfiguration, SweepStart,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== 1D Heat Conduction: Backward Euler + Thomas ===\n");

    let h = 0.05;
    let tau = 10.0;
    let rod = RodProblem::default()
        .with_boundaries(DirichletBoundaries::uniform(0.0))
        .with_initial_temperature(100.0)
        .with_material(Material::steel());

    println!("Rod:");
    println!("  Extent: [{}, {}] m", rod.x_left, rod.x_right);
    println!("  Boundaries: {}", rod.boundaries);
    println!("  Initial interior temperature: {}", rod.initial_temperature);
    println!(
        "  Material: ρ = {}, c = {}, λ = {} (α = {:.3e} m²/s)",
        rod.material.density,
        rod.material.specific_heat,
        rod.material.conductivity,
        rod.material.diffusivity()
    );
    println!("\nGrid: h = {h} m ({} nodes), tau = {tau} s\n", rod.node_count(h));

    let solver = HeatConductionSolver::new();
    let config = SolverConfiguration::implicit(tau, h).with_snapshots(2_000);
    let profile = solver.solve(&rod.with_total_time(80_000.0), &config)?;

    for snapshot in &profile.snapshots {
        let center = snapshot.temperatures[snapshot.temperatures.len() / 2];
        println!("t = {:>8.0} s   center = {center:>8.3}", snapshot.time);
    }

    println!("\nFinal profile (t = {} s):", profile.elapsed);
    println!("{:>8} {:>10} {:>10}", "x (m)", "T", "steady");
    for (x, t) in profile.iter() {
        println!("{x:>8.2} {t:>10.4} {:>10.4}", rod.steady_state_at(x));
    }

    // Legacy sweep indexing, for comparison
    let legacy = solver.solve(
        &rod.with_total_time(2.0),
        &SolverConfiguration::implicit(0.01, h).with_sweep_start(SweepStart::SecondInterior),
    )?;
    let corrected = solver.solve(&rod.with_total_time(2.0), &SolverConfiguration::implicit(0.01, h))?;
    println!(
        "\nAfter 2 s, node 1: {:.4} (sweep from node 1) vs {:.4} (sweep from node 2)",
        corrected.temperatures[1], legacy.temperatures[1]
    );

    Ok(())
}
