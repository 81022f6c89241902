use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use playrate_bridge::{channel, serve, ControllerError, RemoteController};
use playrate_core::keys::{FocusSurface, KeyEvent};
use playrate_core::media::MediaElement;
use playrate_core::mock::MockVideo;
use playrate_engine::{KeyboardHandler, MediaRebinder, MediaRegistry, SpeedAuthority};
use playrate_store::SpeedStore;
use playrate_telemetry::{init_telemetry, TelemetryConfig};

/// Interactive driver for the speed engine: hosts the page-side components
/// and a remote controller talking to them over the in-process transport.
#[derive(Parser, Debug)]
#[command(name = "playrate", version, about = "Playback-speed engine demo")]
struct Cli {
    /// Path to the persisted speed record (default: ~/.playrate/speed.json).
    #[arg(long)]
    speed_file: Option<PathBuf>,

    /// Default log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = cli.log_level.parse().unwrap_or(tracing::Level::INFO);
    init_telemetry(&TelemetryConfig {
        log_level,
        json_output: cli.json_logs,
        ..Default::default()
    });

    let speed_file = cli.speed_file.unwrap_or_else(default_speed_file);
    let store = SpeedStore::new(&speed_file);
    let persisted = store.load();
    tracing::info!(path = %store.path().display(), persisted = ?persisted, "speed record read");

    let registry = Arc::new(MediaRegistry::new());
    let authority = Arc::new(match persisted {
        Some(speed) => SpeedAuthority::with_initial(Arc::clone(&registry), speed),
        None => SpeedAuthority::new(Arc::clone(&registry)),
    });

    // The simulated page starts with one loaded video.
    registry.attach(Arc::new(MockVideo::ready()) as Arc<dyn MediaElement>);
    authority.reapply();

    let rebinder = MediaRebinder::new(Arc::clone(&authority)).start(registry.subscribe());

    let (transport, requests) = channel(32);
    let responder = tokio::spawn(serve(Arc::clone(&authority), requests));
    let controller = RemoteController::new(transport);
    let keyboard = KeyboardHandler::new(Arc::clone(&authority), Arc::clone(&registry));

    println!("playrate {:.2}x", controller.read_speed().await);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        match (command, parts.next()) {
            ("get", _) => println!("{:.2}x", controller.read_speed().await),
            ("set", Some(raw)) => match raw.parse::<f64>() {
                Ok(value) => report(controller.request_set(value).await),
                Err(_) => println!("not a number: {raw}"),
            },
            ("set", None) => println!("usage: set <rate>"),
            ("adj", Some(raw)) => match raw.parse::<f64>() {
                Ok(delta) => report(controller.request_adjust(delta).await),
                Err(_) => println!("not a number: {raw}"),
            },
            ("adj", None) => println!("usage: adj <delta>"),
            ("key", Some(chord)) => {
                let disposition = keyboard.on_key_down(&parse_chord(chord));
                println!("{disposition:?}, speed {:.2}x", authority.speed());
            }
            ("key", None) => println!("usage: key <+|-|*|shift=|NumpadAdd|...>"),
            ("focus", Some("text")) => {
                registry.set_focus(FocusSurface::TextEntry);
                println!("focus: text entry, shortcuts suppressed");
            }
            ("focus", _) => {
                registry.set_focus(FocusSurface::Neutral);
                println!("focus: neutral");
            }
            ("nav", _) => {
                registry.clear();
                registry.attach(Arc::new(MockVideo::ready()) as Arc<dyn MediaElement>);
                // Give the rebinder a beat to re-apply the stored rate.
                tokio::time::sleep(Duration::from_millis(20)).await;
                print_videos(&registry);
            }
            ("videos", _) => print_videos(&registry),
            ("help", _) => print_help(),
            ("quit", _) | ("exit", _) => break,
            (other, _) => println!("unknown command: {other}"),
        }
    }

    rebinder.abort();
    responder.abort();
    tracing::info!("shutting down");
}

fn report(outcome: Result<f64, ControllerError>) {
    match outcome {
        Ok(speed) => println!("{speed:.2}x"),
        Err(error) => println!("error: {error}"),
    }
}

fn parse_chord(chord: &str) -> KeyEvent {
    match chord {
        "shift=" => KeyEvent::printable("=").with_shift(),
        _ if chord.starts_with("Numpad") => KeyEvent::physical(chord),
        _ => KeyEvent::printable(chord),
    }
}

fn print_videos(registry: &MediaRegistry) {
    let snapshot = registry.snapshot();
    if snapshot.is_empty() {
        println!("no media elements");
        return;
    }
    for (index, (id, element)) in snapshot.iter().enumerate() {
        println!(
            "[{index}] {id} rate {:.2}x ready {:?}",
            element.playback_rate(),
            element.ready_state()
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  get              read the current speed");
    println!("  set <rate>       request an absolute speed");
    println!("  adj <delta>      request a relative change");
    println!("  key <chord>      press a shortcut (+ - * shift= NumpadAdd ...)");
    println!("  focus [text]     move focus into a text field, or back out");
    println!("  nav              navigate: swap the page's video element");
    println!("  videos           list media elements");
    println!("  quit             exit");
}

fn default_speed_file() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join(".playrate")
        .join("speed.json")
}
