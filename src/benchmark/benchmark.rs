use std::time::Instant;

use crate::configuration::config::{MassCoupling, ScenarioConfig};
use crate::simulation::interaction::FrameInput;
use crate::simulation::scenario::Scenario;

/// Time the full per-frame step for increasingly long chains
pub fn bench_step() {
    // Different chain lengths to test
    let ns = [5, 50, 500, 5000, 50000];
    let steps = 1000;

    for n in ns {
        let mut cfg = ScenarioConfig::default();
        cfg.chain.count = n;
        // Newtonian coupling and a small dt keep long chains finite over 1000 steps
        cfg.engine.mass_coupling = MassCoupling::Divide;

        let mut scenario = match Scenario::build_scenario(&cfg) {
            Ok(s) => s,
            Err(err) => {
                println!("N = {n:6}, skipped: {err}");
                continue;
            }
        };

        let input = FrameInput {
            dt: 0.001,
            ..Default::default()
        };

        // Warm up
        if let Err(err) = scenario.advance(&input) {
            println!("N = {n:6}, skipped: {err}");
            continue;
        }

        let t0 = Instant::now();
        let mut failed = None;
        for _ in 0..steps {
            if let Err(err) = scenario.advance(&input) {
                failed = Some(err);
                break;
            }
        }
        let elapsed = t0.elapsed().as_secs_f64();

        if let Some(err) = failed {
            println!("N = {n:6}, aborted: {err}");
            continue;
        }

        println!(
            "N = {n:6}, {steps} steps = {:8.6} s, per step = {:10.3} us, per particle = {:8.3} ns",
            elapsed,
            elapsed / steps as f64 * 1e6,
            elapsed / (steps * n) as f64 * 1e9,
        );
    }
}
