use anyhow::Context;
use clap::{Parser, Subcommand};
use scribbler::Config;
use scribbler::input::InputState;
use scribbler::report::SessionReport;
use scribbler::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scribbler")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SCRIBBLER_GIT_HASH"), ")"),
    about = "Freehand drawing surface with erase compositing and undo/redo"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted gesture sequence and print the resulting stroke history
    Replay {
        /// Replay script (TOML with [[steps]] entries)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Config file to use instead of ~/.config/scribbler/config.toml
        #[arg(long, short = 'c', value_name = "PATH")]
        config: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default config file to ~/.config/scribbler/config.toml
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Replay {
            script,
            config,
            json,
        }) => replay(script, config, json),
        Some(Command::InitConfig) => {
            let path = Config::create_default_file()?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
        None => {
            // No subcommand: show usage
            println!("scribbler: Freehand drawing surface with erase compositing and undo/redo");
            println!();
            println!("Usage:");
            println!("  scribbler replay <SCRIPT>     Replay a gesture script and summarize the strokes");
            println!("  scribbler init-config        Write a default config file");
            println!("  scribbler --help             Show help");
            Ok(())
        }
    }
}

fn replay(script_path: PathBuf, config_path: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)
        .with_context(|| format!("Could not load replay script {}", script_path.display()))?;
    log::info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        script_path.display()
    );

    let mut state = InputState::with_defaults(
        config.drawing.default_properties(),
        Some(config.canvas.background()),
    );
    state.update_screen_dimensions(config.canvas.width, config.canvas.height);

    let outcome = script.replay(&mut state);

    // Composite the final frame off-screen so every stroke goes through the renderer.
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        config.canvas.width as i32,
        config.canvas.height as i32,
    )
    .context("Failed to create render surface")?;
    let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
    state.render_if_needed(&ctx).context("Failed to composite strokes")?;
    let damage = state.take_dirty_regions();
    log::debug!(
        "Rendered {}x{} frame ({} damage regions)",
        config.canvas.width,
        config.canvas.height,
        damage.len()
    );

    let report = SessionReport::new(&state, outcome);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
