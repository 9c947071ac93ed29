use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use swipe_deck::app::{self, App, AppConfig};
use swipe_deck::deck::{GestureScript, resolve_swipe_distance};
use swipe_deck::health;

/// Swipe through movie candidates: right to like, left to pass
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Replay a scripted gesture sequence instead of opening a window
    #[arg(long)]
    script: bool,

    /// Run health checks and exit with the report's exit code
    #[arg(long)]
    health: bool,

    /// Movie titles, first one on top
    titles: Vec<String>,
}

const DEFAULT_TITLES: [&str; 5] = ["Heat", "Ran", "Alien", "Paprika", "Stalker"];

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    }
    .context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let titles: Vec<String> = if args.titles.is_empty() {
        DEFAULT_TITLES.iter().map(|t| t.to_string()).collect()
    } else {
        args.titles
    };

    if args.script {
        return replay(&config, &titles);
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, &titles);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;
    Ok(())
}

/// Alternate like/pass swipes over every card, with a hesitant drag first
fn replay(config: &AppConfig, titles: &[String]) -> Result<()> {
    let bounds = app::card_bounds(config.window.width as f32, config.window.height as f32);
    let [x, y] = bounds.center();
    let reach = 1.5 * resolve_swipe_distance(config.deck.swipe_distance);

    let mut script = GestureScript::horizontal_drag(x, x + reach / 3.0, y, 10.0);
    for i in 0..titles.len() {
        let to = if i % 2 == 0 { x + reach } else { x - reach };
        script = script.then(GestureScript::horizontal_drag(x, to, y, 25.0));
    }

    let session = app::replay(config, titles, script);
    for vote in session.votes() {
        println!("{:>6}  {}", vote.direction, vote.title);
    }
    info!(remaining = session.deck().len(), "Replay finished");
    Ok(())
}
