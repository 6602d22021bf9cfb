use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use pv_app::{AppResult, Algorithm, Scene, Session, SessionConfig};
use pv_core::timing;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(about = "pathviz CLI - BFS/DFS paths over hand-drawn graphs", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log adjacency/search timings
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node with its neighbors
    Adjacency {
        /// Path to the scene file (YAML or JSON)
        scene_path: PathBuf,
    },
    /// Find a path from the scene's start node to its end node
    Solve {
        /// Path to the scene file (YAML or JSON)
        scene_path: PathBuf,
        /// Search algorithm (bfs or dfs)
        #[arg(short, long, default_value = "bfs")]
        algorithm: Algorithm,
        /// Reveal the path step by step
        #[arg(long)]
        animate: bool,
        /// Time between reveal steps in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Session config file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run both algorithms and compare their paths
    Compare {
        /// Path to the scene file (YAML or JSON)
        scene_path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.timing {
        timing::enable_timing();
    }

    let result = match cli.command {
        Commands::Adjacency { scene_path } => cmd_adjacency(&scene_path),
        Commands::Solve {
            scene_path,
            algorithm,
            animate,
            delay_ms,
            config,
        } => cmd_solve(&scene_path, algorithm, animate, delay_ms, config.as_deref()),
        Commands::Compare { scene_path } => cmd_compare(&scene_path),
    };
    timing::solve_timing::log_summary();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_session(scene_path: &Path, config: SessionConfig) -> AppResult<Session> {
    let scene = Scene::load(scene_path)?;
    scene.into_session(config)
}

fn cmd_adjacency(scene_path: &Path) -> AppResult<()> {
    let session = open_session(scene_path, SessionConfig::default())?;
    println!(
        "Number of Nodes: {}  Number of Connections: {}",
        session.point_count(),
        session.connection_count()
    );

    let adj = session.adjacency();
    for ((i, neighbors), point) in adj.iter().zip(session.points()) {
        let labels: Vec<String> = neighbors.iter().map(|n| (n + 1).to_string()).collect();
        println!("  {:>3} {:<16} -> [{}]", i + 1, point.to_string(), labels.join(", "));
    }
    Ok(())
}

fn cmd_solve(
    scene_path: &Path,
    algorithm: Algorithm,
    animate: bool,
    delay_ms: Option<u64>,
    config_path: Option<&Path>,
) -> AppResult<()> {
    let mut config = match config_path {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(ms) = delay_ms {
        config = config.with_step_delay_ms(ms);
        config.validate()?;
    }

    let mut session = open_session(scene_path, config)?;
    println!("Solving with {} ...", algorithm);
    let path = session.solve(algorithm)?;
    println!("✓ Path ({} edges): {}", path.edge_count(), path);

    if animate && path.len() > 1 {
        reveal(&session, algorithm);
    }
    Ok(())
}

/// Print each reveal step as the animator publishes it.
fn reveal(session: &Session, algorithm: Algorithm) {
    let animator = session.animator(algorithm);
    let generation = animator.generation();
    let path = animator.path();
    let timeout = animator.delay() * 2 + Duration::from_secs(1);

    render_reveal(&animator.revealed(), path.len());
    while let Some(event) = animator.next_event(timeout) {
        if event.generation != generation {
            continue;
        }
        render_reveal(&path.as_slice()[..=event.index], path.len());
        if event.finished {
            break;
        }
    }
    println!();
}

fn render_reveal(revealed: &[usize], total: usize) {
    let width = 20usize;
    let filled = if total > 1 {
        (revealed.len().saturating_sub(1) * width) / (total - 1)
    } else {
        width
    };
    let labels: Vec<String> = revealed.iter().map(|n| (n + 1).to_string()).collect();
    print!(
        "\r[{}{}] {}/{}  {}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        revealed.len(),
        total,
        labels.join(" -> ")
    );
    let _ = io::stdout().flush();
}

fn cmd_compare(scene_path: &Path) -> AppResult<()> {
    let mut session = open_session(scene_path, SessionConfig::default())?;
    for algorithm in Algorithm::ALL {
        match session.solve(algorithm) {
            Ok(path) => println!("  {}: {} edges  {}", algorithm, path.edge_count(), path),
            Err(e) => println!("  {}: {}", algorithm, e),
        }
    }
    Ok(())
}
