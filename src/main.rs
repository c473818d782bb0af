use springchain::{FrameInput, Scenario, ScenarioConfig};
use springchain::{run_2d, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "chain.yaml")]
    file_name: String,

    /// Step the chain without opening a window
    #[arg(long)]
    headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    steps: usize,

    /// Frame time in seconds for headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, steps: usize, dt: f64) -> Result<()> {
    let input = FrameInput { dt, ..Default::default() };
    for _ in 0..steps {
        scenario.advance(&input)?;
    }

    info!(t = scenario.t, "headless run finished");
    for (i, p) in scenario.chain.particles().iter().enumerate() {
        info!(i, x = p.x.x, y = p.x.y, vx = p.v.x, vy = p.v.y, "particle");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    if args.headless {
        // bevy's LogPlugin installs its own subscriber for the windowed path
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
        let scenario = Scenario::build_scenario(&scenario_cfg)?;
        return run_headless(scenario, args.steps, args.dt);
    }

    let scenario = Scenario::build_scenario(&scenario_cfg)?;
    run_2d(scenario, &scenario_cfg.window);

    Ok(())
}
