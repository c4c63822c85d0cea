use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use cumulus::config::{self, RunConfig};
use cumulus::solver::diagnostics;
use cumulus::Simulation;

fn main() {
    env_logger::init();
    let cfg = config::load();
    let mut sim = Simulation::from_config(&cfg);

    // Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let start = Instant::now();
    let summary = run(&mut sim, &cfg.run, &running);
    log::info!(
        "stopped after {} ticks ({:.2?} wall time, {} with non-finite state)",
        summary.ticks,
        start.elapsed(),
        summary.non_finite_ticks
    );
}

#[derive(Debug, Default, PartialEq)]
struct RunSummary {
    ticks: u64,
    non_finite_ticks: u64,
}

/// Step at fixed dt until the tick budget is spent or `running` drops.
fn run(sim: &mut Simulation, run: &RunConfig, running: &AtomicBool) -> RunSummary {
    let mut summary = RunSummary::default();
    while running.load(Ordering::SeqCst) && (run.ticks == 0 || summary.ticks < run.ticks) {
        let contacts = sim.tick(run.dt);
        summary.ticks += 1;
        if check_finite(sim, summary.ticks) > 0 {
            summary.non_finite_ticks += 1;
        }
        if run.log_every > 0 && summary.ticks % run.log_every == 0 {
            report(sim, summary.ticks, contacts);
        }
    }
    summary
}

/// Warn when the state holds NaN or infinite values. Returns how many.
fn check_finite(sim: &Simulation, tick: u64) -> usize {
    let bad = diagnostics::count_non_finite(sim.fields(), sim.particles());
    if bad > 0 {
        log::warn!("tick {tick}: {bad} non-finite values in simulation state");
    }
    bad
}

fn report(sim: &Simulation, tick: u64, contacts: usize) {
    let fields = sim.fields();
    log::info!(
        "tick {tick} [{}] KE={:.4e} max|div|={:.3e} water={:.4} wall_contacts={contacts}",
        sim.frames_per_second(),
        diagnostics::compute_kinetic_energy(&fields.velocity),
        diagnostics::max_abs_divergence(&fields.velocity),
        diagnostics::total_water(fields),
    );
}
