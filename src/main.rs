//! Head pointer application: replays recorded landmark frames through the
//! orientation estimator and region selector.

use anyhow::Result;
use clap::Parser;
use head_pointer::{app::PointerApp, config::Config, source::RecordedSource};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded landmark frames to replay (YAML)
    #[arg(short, long)]
    frames: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Override screen canvas width
    #[arg(long)]
    screen_width: Option<f64>,

    /// Override screen canvas height
    #[arg(long)]
    screen_height: Option<f64>,

    /// Enable debug output and the estimator overlay data
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Head Pointer");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    if let Some(width) = args.screen_width {
        config.screen.width = width;
    }
    if let Some(height) = args.screen_height {
        config.screen.height = height;
    }
    if args.debug {
        config.debug_overlay = true;
    }
    config.validate()?;

    let source = RecordedSource::from_file(&args.frames)?;
    let mut app = PointerApp::new(&config, Box::new(source));
    app.run()?;

    Ok(())
}
