use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use vibecanvas::designer::resize::preset_for;
use vibecanvas::{
    init_logging, CanvasConfig, DesignerState, DesktopBridge, OperationOutcome, OutcomeKind,
    ResizePolicy, BUILD_DATE, VERSION,
};

#[derive(Debug, Parser)]
#[command(name = "vibecanvas", version = VERSION, about = "VibeCanvas drawing files")]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stage size and a shape summary of a canvas file
    Info { file: PathBuf },

    /// Resize the stage of a canvas file
    Resize {
        file: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// `scale` rescales every shape, `clear` discards them
        #[arg(long, default_value = "scale")]
        policy: ResizePolicy,
        /// Write here instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create an empty canvas file
    New {
        file: PathBuf,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },

    /// Paste the clipboard image into a canvas file
    Paste { file: PathBuf },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CanvasConfig> {
    match path {
        Some(path) => CanvasConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(CanvasConfig::load_or_default()),
    }
}

fn load_state(config: &CanvasConfig, file: &Path) -> anyhow::Result<DesignerState> {
    let mut state = DesignerState::with_config(config);
    state
        .load_from_file(file)
        .with_context(|| format!("Cannot open {}", file.display()))?;
    Ok(state)
}

fn report(outcome: OperationOutcome) -> anyhow::Result<()> {
    match (outcome.kind, outcome.message) {
        (OutcomeKind::Error, message) => {
            bail!(message.unwrap_or_else(|| "operation failed".to_string()))
        }
        (_, Some(message)) => println!("{}", message),
        (_, None) => {}
    }
    Ok(())
}

fn print_info(state: &DesignerState) {
    let stage = state.canvas.stage();
    println!("Design:  {}", state.display_name());
    match preset_for(stage.width, stage.height) {
        Some(preset) => println!("Stage:   {} x {} ({})", stage.width, stage.height, preset.name),
        None => println!("Stage:   {} x {}", stage.width, stage.height),
    }
    println!("Shapes:  {}", state.canvas.shape_count());

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for obj in state.canvas.shapes() {
        *counts.entry(obj.shape.shape_type().to_string()).or_default() += 1;
    }
    for (kind, count) in counts {
        println!("  {:<10} {}", kind, count);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("VibeCanvas {} (built {})", VERSION, BUILD_DATE);

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Command::Info { file } => {
            let state = load_state(&config, &file)?;
            print_info(&state);
        }
        Command::Resize {
            file,
            width,
            height,
            policy,
            output,
        } => {
            let mut state = load_state(&config, &file)?;
            report(state.resize_stage(width, height, policy))?;
            state.save_to_file(output.as_deref().unwrap_or(&file))?;
        }
        Command::New {
            file,
            width,
            height,
        } => {
            let mut state = DesignerState::with_config(&config);
            if width.is_some() || height.is_some() {
                let stage = state.canvas.stage();
                report(state.resize_stage(
                    width.unwrap_or(stage.width),
                    height.unwrap_or(stage.height),
                    ResizePolicy::Clear,
                ))?;
            }
            state.save_to_file(&file)?;
            println!("Created {}", file.display());
        }
        Command::Paste { file } => {
            let mut state = load_state(&config, &file)?;
            let bridge = DesktopBridge::new();
            let outcome = state.paste_from_clipboard(&bridge).await;
            let pasted = outcome.success;
            report(outcome)?;
            if pasted {
                state.save_to_file(&file)?;
            }
        }
    }

    Ok(())
}
