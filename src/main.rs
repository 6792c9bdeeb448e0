//! Hand gesture control: turns hand landmark frames into action tokens.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::{
    actions::create_sink,
    app::{AppConfig, GestureApp, InputSource},
    config::{Config, EXAMPLE_CONFIG},
    dispatch::HandFilter,
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON Lines landmark frames to read ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Start with actions armed
    #[arg(short, long)]
    armed: bool,

    /// Hand allowed to trigger actions (left, right, any)
    #[arg(long)]
    hand: Option<String>,

    /// Seconds between dispatched actions
    #[arg(long)]
    cooldown: Option<f64>,

    /// Smoothing window length in frames
    #[arg(short, long)]
    window: Option<usize>,

    /// Votes required to accept a gesture
    #[arg(short, long)]
    min_votes: Option<usize>,

    /// Where dispatched actions go (log, stdout)
    #[arg(short, long, default_value = "log")]
    output: String,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control");

    // Load configuration if provided
    let mut settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line overrides
    if args.armed {
        settings.dispatch.start_armed = true;
    }
    if let Some(hand) = &args.hand {
        settings.dispatch.active_hand = hand.parse::<HandFilter>()?;
    }
    if let Some(cooldown) = args.cooldown {
        settings.dispatch.cooldown_s = cooldown;
    }
    if let Some(window) = args.window {
        settings.smoothing.window_len = window;
    }
    if let Some(min_votes) = args.min_votes {
        settings.smoothing.min_votes = min_votes;
    }

    let config = AppConfig {
        input: InputSource::from_arg(&args.input),
        settings,
        debug: args.debug,
    };

    // Create and run application
    let sink = create_sink(&args.output)?;
    let mut app = GestureApp::new(config, sink)?;
    app.run()?;

    Ok(())
}
