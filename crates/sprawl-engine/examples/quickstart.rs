//! Run a synthetic city through the full rule plan and print the census
//! after every iteration.
//!
//! ```text
//! cargo run -p sprawl-engine --example quickstart
//! RUST_LOG=debug cargo run -p sprawl-engine --example quickstart
//! ```

use std::error::Error;
use std::ops::ControlFlow;

use sprawl_bench::synthetic_city;
use sprawl_core::{Census, LandUse};
use sprawl_engine::{Simulation, SimulationConfig};
use sprawl_rules::RuleId;

const ITERATIONS: u64 = 12;

fn print_census(label: &str, census: &Census) {
    let row: Vec<String> = LandUse::ALL
        .iter()
        .map(|&c| format!("{:>6.1}%", census.fraction(c) * 100.0))
        .collect();
    println!("{label:>6} {}", row.join(" "));
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let grid = synthetic_city(200, 200, 2024)?;
    let plan: Vec<&str> = RuleId::ALL.iter().map(|id| id.name()).collect();
    let params = RuleId::defaults_for(&RuleId::ALL).with("suburban_distance", 60);
    let config = SimulationConfig::new(grid)
        .with_rules(plan)
        .with_params(params);
    config.validate()?;

    let mut sim = Simulation::new(config)?;

    let header: Vec<String> = LandUse::ALL.iter().map(|c| format!("{:>7}", c.label())).collect();
    println!("{:>6} {}", "iter", header.join(" "));
    print_census("0", &sim.census());

    let summary = sim.run(ITERATIONS, |step| {
        print_census(&step.iteration.to_string(), &Census::of(step.grid));
        if step.metrics.total_changed() == 0 {
            println!("stable after {}", step.iteration);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    println!(
        "{} iterations in {:.2} ms",
        summary.iterations,
        summary.total_us as f64 / 1000.0
    );
    for (name, us) in &sim.last_metrics().rule_us {
        println!("  {name:<28} {us:>8} us");
    }
    Ok(())
}
