use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use circular_slider::{
    CircularSlider, SliderChange,
    geometry::{Rect, percentage_from_point},
    glam::DVec2,
    range::ValueRange,
    slider::SliderLayers,
};
use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

mod scenario;
use scenario::{Scenario, Step};

#[derive(Parser)]
#[command(name = "circular-slider-example")]
#[command(version, about = "Drive a circular slider from scripted input", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and print every notification
    Replay {
        /// Path to the scenario TOML file
        scenario: PathBuf,
        /// Print the render model after each step
        #[arg(short, long)]
        layers: bool,
    },
    /// Show which value a pointer position maps to
    Locate {
        x: f64,
        y: f64,
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 100.0)]
        max: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Control bounds as left,top,width,height
        #[arg(
            long,
            value_delimiter = ',',
            num_args = 4,
            default_values_t = [0.0, 0.0, 320.0, 320.0]
        )]
        bounds: Vec<f64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { scenario, layers } => replay(&Scenario::load(&scenario)?, layers),
        Commands::Locate {
            x,
            y,
            min,
            max,
            step,
            bounds,
        } => locate(DVec2::new(x, y), min, max, step, &bounds),
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,circular_slider=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init();
}

fn replay(scenario: &Scenario, show_layers: bool) -> Result<()> {
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let changing = log.clone();
    let changed = log.clone();
    let args = scenario
        .slider
        .to_args()
        .on_changing(move |change: SliderChange| {
            changing
                .lock()
                .push(format!("{} {}", change.event_name_changing(), fmt_value(change.value)))
        })
        .on_changed(move |change: SliderChange| {
            changed
                .lock()
                .push(format!("{} {}", change.event_name_changed(), fmt_value(change.value)))
        });

    let mut slider = CircularSlider::new(args).context("invalid slider configuration")?;
    let bounds: Rect = scenario.bounds.into();
    info!(steps = scenario.steps.len(), "replaying scenario");

    for (index, step) in scenario.steps.iter().enumerate() {
        let consumed = run_step(&mut slider, step, bounds)?;
        debug!(index, ?step, consumed, "step applied");
        if !consumed {
            warn!(index, "step ignored by slider");
        }
        println!("[{index}] {}", describe(step));
        for note in log.lock().drain(..) {
            println!("      {note}");
        }
        if show_layers {
            print_layers(&slider.layers());
        }
    }

    println!(
        "final: value={} low={} high={} pressed={}",
        fmt_value(slider.value()),
        fmt_value(slider.low()),
        fmt_value(slider.high()),
        slider.is_pressed()
    );
    Ok(())
}

fn run_step(slider: &mut CircularSlider, step: &Step, bounds: Rect) -> Result<bool> {
    if let Some(event) = step.gesture(&slider.range(), bounds) {
        return Ok(slider.drive(&mut std::iter::once(event)) == 1);
    }
    let outcome = match *step {
        Step::KeyDown { key, handle } => slider.handle_key_down(key.into(), handle.into()),
        Step::KeyUp { key, handle } => slider.handle_key_up(key.into(), handle.into()),
        Step::HostUpdate {
            value,
            low,
            high,
            current,
            disabled,
        } => {
            let mut args = slider.args().clone();
            args.value = value.or(args.value);
            args.low = low.or(args.low);
            args.high = high.or(args.high);
            args.current = current.or(args.current);
            args.disabled = disabled.unwrap_or(args.disabled);
            slider.apply_args(args).context("host update rejected")?;
            return Ok(true);
        }
        _ => return Ok(false),
    };
    Ok(outcome.is_consumed())
}

fn locate(position: DVec2, min: f64, max: f64, step: f64, bounds: &[f64]) -> Result<()> {
    let range = ValueRange::new(min, max, step)?;
    let [left, top, width, height] = <[f64; 4]>::try_from(bounds)
        .map_err(|_| anyhow::anyhow!("expected four bounds values, got {}", bounds.len()))?;
    let rect = Rect::new(left, top, width, height);
    match percentage_from_point(position, &rect) {
        Some(percentage) => {
            let value = range.percentage_to_value(percentage);
            println!(
                "percentage={percentage:.4} value={value:.4} stepped={}",
                range.stepped_value(value)
            );
        }
        None => println!("bounds are degenerate, no value"),
    }
    Ok(())
}

fn describe(step: &Step) -> String {
    match step {
        Step::KeyDown { key, handle } => format!("key-down {key:?} on {handle:?}"),
        Step::KeyUp { key, handle } => format!("key-up {key:?} on {handle:?}"),
        Step::HostUpdate { .. } => "host-update".to_owned(),
        other => format!("{other:?}"),
    }
}

fn print_layers(layers: &SliderLayers) {
    println!(
        "      track {:.1}deg from {:.1}deg (pressed={}, inactive={})",
        layers.track.sweep_degrees, layers.rotation_degrees, layers.pressed, layers.inactive
    );
    for arc in &layers.handles {
        println!(
            "      {} {:?}: colored {:.1}+{:.1}deg",
            arc.handle.name(),
            arc.mode,
            arc.colored.start_degrees,
            arc.colored.sweep_degrees
        );
        if let Some(target) = arc.target_position {
            println!("        handle at ({:.1}, {:.1})", target.x, target.y);
        }
    }
    if let Some(current) = layers.current {
        println!("      current dot at {:.1}deg", current.start_degrees);
    }
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "unset".to_owned(), |v| v.to_string())
}
