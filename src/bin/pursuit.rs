//! Pursuit simulator CLI binary.
//!
//! Runs the four-bug pursuit problem and prints the winding angle and arc
//! length of the first bug's path, one per line.
//!
//! # Commands
//!
//! - `run` (default) - Simulate, print diagnostics, optionally write the trajectory plot
//! - `trace` - Write the recorded trajectory as JSON
//! - `config` - Print the effective configuration as TOML

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pursuit::{
    integrate, run, Config, ConfigLayer, PlotData, Renderer, SvgRenderer, VERSION,
};

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(version = VERSION)]
#[command(about = "Four-bug pursuit curve simulator", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and print winding angle and arc length
    Run(RunArgs),

    /// Write the recorded trajectory as JSON
    Trace {
        #[command(flatten)]
        sim: SimArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective configuration
    Config {
        #[command(flatten)]
        sim: SimArgs,
    },
}

#[derive(Args)]
struct SimArgs {
    /// Total simulated time
    #[arg(short = 't', long, allow_negative_numbers = true)]
    duration: Option<f64>,

    /// Euler time step
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    sim: SimArgs,

    /// Plot output path (SVG)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Skip writing the plot
    #[arg(long, conflicts_with = "plot")]
    no_plot: bool,

    /// Print the full run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => cmd_run(args),
        None => cmd_run(cli.run),
        Some(Commands::Trace {
            sim,
            output,
            pretty,
        }) => cmd_trace(sim, output, pretty),
        Some(Commands::Config { sim }) => cmd_config(sim),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    init_tracing(args.sim.verbose);
    let mut config = resolve_config(&args.sim)?;

    if args.no_plot {
        config.render.enabled = false;
    } else if let Some(path) = args.plot {
        config.render.enabled = true;
        config.render.output = path;
    }

    tracing::info!(
        duration = config.simulation.duration,
        dt = config.simulation.dt,
        "Starting pursuit simulation"
    );
    let result = run(&config.simulation)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.report)?);
    } else {
        println!("{}", result.report.diagnostics.winding_angle);
        println!("{}", result.report.diagnostics.arc_length);
    }

    if config.render.enabled {
        let renderer = SvgRenderer::new(&config.render.output)
            .with_size(config.render.width, config.render.height)
            .with_caption(format!(
                "Pursuit trajectory (t = {}, dt = {})",
                config.simulation.duration, config.simulation.dt
            ));
        renderer
            .render(&PlotData::from_trajectory(&result.trajectory))
            .with_context(|| format!("{} renderer failed", renderer.name()))?;
    }

    Ok(())
}

fn cmd_trace(sim: SimArgs, output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    init_tracing(sim.verbose);
    let config = resolve_config(&sim)?;
    let params = config.simulation;

    let trajectory = integrate(&params)?;
    let samples = trajectory.samples(params.dt);
    let json = if pretty {
        serde_json::to_string_pretty(&samples)?
    } else {
        serde_json::to_string(&samples)?
    };

    write_output(output, &json)
}

fn cmd_config(sim: SimArgs) -> anyhow::Result<()> {
    init_tracing(sim.verbose);
    let config = resolve_config(&sim)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

// Helper functions

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults < user config file < `--config` < environment < flags.
fn resolve_config(sim: &SimArgs) -> anyhow::Result<Config> {
    let mut layers = Vec::new();

    if let Some(path) = Config::default_path().filter(|p| p.exists()) {
        tracing::debug!("Loading user config from {}", path.display());
        layers.push(
            ConfigLayer::from_file(&path)
                .with_context(|| format!("loading {}", path.display()))?,
        );
    }
    if let Some(path) = &sim.config {
        layers.push(
            ConfigLayer::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        );
    }
    layers.push(ConfigLayer::from_env());

    let mut flags = ConfigLayer::default();
    flags.simulation.duration = sim.duration;
    flags.simulation.dt = sim.dt;
    layers.push(flags);

    Ok(Config::layered(layers))
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote trajectory to {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
