//! Projectile with quadratic drag, several time steps side by side
//!
//! Reproduces the lab exercise: launch a 1 kg ball at 50 m/s and 45°, fly it
//! with decreasing dt and compare with the drag-free parabola.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example projectile
//! ```

use labsim::physics::{LaunchParameters, ideal_flight_time, ideal_max_height, ideal_range};
use labsim::solver::compare_time_steps;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Projectile with Quadratic Drag ===\n");

    let launch = LaunchParameters::default();
    let time_steps = [0.1, 0.05, 0.01, 0.001];

    println!("Launch Parameters:");
    println!("  Speed: {} m/s", launch.speed);
    println!("  Angle: {:.1}°", launch.angle_degrees());
    println!("  Mass: {} kg", launch.mass);
    println!("  Radius: {} m", launch.radius);
    println!("  Air density: {} kg/m³", launch.air_density);
    println!("  Drag coefficient: {}", launch.drag_coefficient);
    println!("  Drag factor k: {:.4e} 1/m\n", launch.drag_factor());

    println!("Drag-free reference:");
    println!("  Range: {:.2} m", ideal_range(launch.speed, launch.angle, launch.gravity));
    println!(
        "  Max height: {:.2} m",
        ideal_max_height(launch.speed, launch.angle, launch.gravity)
    );
    println!(
        "  Flight time: {:.2} s\n",
        ideal_flight_time(launch.speed, launch.angle, launch.gravity)
    );

    for (dt, run) in time_steps.iter().zip(compare_time_steps(&launch, &time_steps)) {
        let flight = run?;
        println!("--- dt = {dt} ({} samples) ---", flight.len());
        println!("{}\n", flight.summary);
    }

    // Coarse path, printed as a small table for plotting elsewhere
    let coarse = compare_time_steps(&launch, &[0.5]).remove(0)?;
    println!("Path at dt = 0.5:");
    println!("{:>8} {:>10} {:>10}", "t (s)", "x (m)", "y (m)");
    for (t, x, y) in coarse.samples() {
        println!("{t:>8.2} {x:>10.2} {y:>10.2}");
    }

    Ok(())
}
