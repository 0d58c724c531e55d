// SPDX-License-Identifier: MPL-2.0
//! Headless demo: plays a simulated video and persists its resume position.
//!
//! Run it twice with the same `--video-id` to see playback resume.

use playback_overlay::app::config;
use playback_overlay::player::events;
use playback_overlay::player::{
    ControlsView, FileStore, HeadlessSurface, PlaybackController, PlayerOptions, Render,
    SimulatedClock,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
playback_overlay

USAGE:
  playback_overlay [OPTIONS] [SOURCE]

OPTIONS:
  --video-id ID      Identity used for the resume position [default: demo]
  --duration SECS    Simulated media duration [default: 120]
  --seconds N        Simulated seconds to play [default: 10]
  --data-dir DIR     Directory for the resume store
  --autoplay         Start playing on attach
  -h, --help         Print help
";

struct Flags {
    source: String,
    video_id: String,
    duration_secs: f64,
    play_secs: u32,
    data_dir: Option<PathBuf>,
    autoplay: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        video_id: args
            .opt_value_from_str("--video-id")?
            .unwrap_or_else(|| "demo".to_string()),
        duration_secs: args.opt_value_from_str("--duration")?.unwrap_or(120.0),
        play_secs: args.opt_value_from_str("--seconds")?.unwrap_or(10),
        data_dir: args.opt_value_from_str("--data-dir")?,
        autoplay: args.contains("--autoplay"),
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .unwrap_or_else(|| "output.webm".to_string()),
    };
    Ok(Some(flags))
}

/// Renders views as log lines.
struct LogRenderer;

impl Render for LogRenderer {
    fn render(&mut self, view: &ControlsView) {
        tracing::info!(
            time = %format!("{} / {}", view.current_time_text, view.total_time_text),
            paused = view.paused,
            volume = %view.volume_level,
            rate = %view.rate_label,
            progress = view.progress_position,
            "overlay"
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (cfg, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(%key, "using default configuration");
    }

    let store = match FileStore::open(flags.data_dir.clone()) {
        Ok((store, warning)) => {
            if let Some(key) = warning {
                tracing::warn!(%key, "starting with an empty resume store");
            }
            store
        }
        Err(err) => {
            tracing::error!(%err, "failed to open resume store");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(path = %store.path().display(), "resume store");

    let options = PlayerOptions::from_config(flags.source, flags.video_id, &cfg)
        .with_autoplay(flags.autoplay || cfg.playback.autoplay == Some(true));

    let (notifier, listener) = events::channel();
    let clock = SimulatedClock::new(flags.duration_secs, notifier);
    let mut controller =
        PlaybackController::attach(options, clock, HeadlessSurface::new(), store, listener);

    controller.clock_mut().load();
    controller.pump();

    let mut renderer = LogRenderer;
    controller.render_to(&mut renderer);

    // Without autoplay the demo presses play itself after showing the paused view.
    if !controller.state().is_playing() {
        tracing::info!("autoplay off, pressing play");
        controller.toggle_playback();
    }
    for _ in 0..flags.play_secs {
        controller.clock_mut().tick(1.0);
        controller.pump();
        controller.render_to(&mut renderer);
        if !controller.state().is_playing() {
            break;
        }
    }

    controller.detach();
    ExitCode::SUCCESS
}
