//! uiprobe - Command-line interface for Android UI probing
//!
//! Usage:
//!     uiprobe [OPTIONS] <COMMAND>
//!
//! Environment Variables:
//!     UI_PROBE_DEVICE_ID: ADB device ID for multi-device setups
//!     UI_PROBE_ADB_PATH: adb binary to use (default: adb)
//!     RUST_LOG: log filter (default: warn)

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ui_probe::{elements_json, extract_elements, AdbDevice, ArtifactSaver};

/// Android UI probing over adb
#[derive(Parser, Debug)]
#[command(name = "uiprobe")]
#[command(about = "Android UI probing - dump, flatten and drive the on-screen UI")]
#[command(after_help = r#"Examples:
    # Dump the current screen's elements to ui_elements.json
    uiprobe dump

    # Print the elements instead of writing a file
    uiprobe dump --stdout

    # Flatten a dump pulled earlier
    uiprobe parse window_dump.xml

    # Tap the center of an element
    uiprobe tap 540 1200

    # Type text and press enter on a specific device
    uiprobe -d emulator-5554 text "hello world"
    uiprobe -d emulator-5554 key enter
"#)]
struct Cli {
    /// ADB device ID
    #[arg(short = 'd', long, global = true, env = "UI_PROBE_DEVICE_ID")]
    device_id: Option<String>,

    /// Path to the adb binary
    #[arg(long, global = true, env = "UI_PROBE_ADB_PATH", default_value = "adb")]
    adb_path: String,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the UI hierarchy and write the flattened elements as JSON
    Dump {
        /// Output file
        #[arg(short, long, default_value = "ui_elements.json")]
        output: PathBuf,

        /// Print the JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Flatten a saved hierarchy dump without touching a device
    Parse {
        /// XML dump file
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tap at screen coordinates
    Tap { x: i32, y: i32 },

    /// Type text into the focused field
    Text { text: String },

    /// Press a key (back, home, recent, enter, or any KEYCODE_ suffix)
    Key { name: String },

    /// Run a shell command on the device
    Shell {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List installed third-party packages
    Apps,

    /// Launch an app by package name
    Launch { package: String },

    /// Capture a screenshot
    Screenshot {
        /// Directory to write the PNG into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Print the PNG as base64 instead of writing a file
        #[arg(long)]
        base64: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Fail early with install hints when adb is not reachable
fn check_adb_installed(adb_path: &str) -> Result<()> {
    if which::which(adb_path).is_ok() {
        return Ok(());
    }
    Err(anyhow!(
        "{} is not installed or not in PATH.\n  \
         - macOS: brew install android-platform-tools\n  \
         - Linux: sudo apt install android-tools-adb\n  \
         - Windows: https://developer.android.com/studio/releases/platform-tools",
        adb_path
    ))
}

fn build_device(args: &Cli) -> AdbDevice {
    debug!("Using {} (device_id: {:?})", args.adb_path, args.device_id);
    let device = AdbDevice::with_path(args.adb_path.as_str());
    match &args.device_id {
        Some(id) => device.with_device_id(id.as_str()),
        None => device,
    }
}

/// Directory and file name an output path resolves to
fn split_output(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid output path: {}", path.display()))?
        .to_string();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

/// Flatten `xml` and write the elements as JSON to `output`
async fn write_elements(output: &Path, xml: &str) -> Result<PathBuf> {
    let elements = extract_elements(xml).map_err(|e| anyhow!("Error parsing XML: {}", e))?;
    let (dir, file_name) = split_output(output)?;
    let saver = ArtifactSaver::new(dir).await?;
    let written = saver.save_elements(&elements, &file_name).await?;
    println!("\u{2713} {} elements written to {}", elements.len(), written.display());
    Ok(written)
}

async fn run_parse(input: &Path, output: Option<&Path>) -> Result<()> {
    let xml = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    match output {
        None => println!("{}", elements_json(&xml)),
        Some(path) => {
            write_elements(path, &xml).await?;
        }
    }
    Ok(())
}

async fn run_command(args: &Cli) -> Result<()> {
    let device = build_device(args);

    match &args.command {
        Commands::Parse { input, output } => run_parse(input, output.as_deref()).await?,
        Commands::Dump { output, stdout } => {
            let xml = device.dump_hierarchy().await?;
            if *stdout {
                println!("{}", elements_json(&xml));
            } else {
                write_elements(output, &xml).await?;
            }
        }
        Commands::Tap { x, y } => {
            device.tap(*x, *y).await?;
            println!("\u{2713} Tapped ({}, {})", x, y);
        }
        Commands::Text { text } => {
            device.send_keys(text).await?;
            println!("\u{2713} Sent text");
        }
        Commands::Key { name } => {
            device.press(name).await?;
            println!("\u{2713} Pressed {}", name);
        }
        Commands::Shell { command } => {
            let output = device.shell(&command.join(" ")).await?;
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Commands::Apps => {
            let mut packages = device.app_list().await?;
            packages.sort();
            for package in packages {
                println!("{}", package);
            }
        }
        Commands::Launch { package } => {
            device.app_start(package).await?;
            println!("\u{2713} Launched {}", package);
        }
        Commands::Screenshot { dir, base64 } => {
            let screenshot = device.screenshot().await?;
            if *base64 {
                println!("{}", screenshot.to_base64());
            } else {
                let saver = ArtifactSaver::new(dir).await?;
                let written = saver.save_screenshot(&screenshot).await?;
                println!(
                    "\u{2713} {}x{} screenshot written to {}",
                    screenshot.width,
                    screenshot.height,
                    written.display()
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    if !matches!(args.command, Commands::Parse { .. }) {
        check_adb_installed(&args.adb_path)?;
    }
    run_command(&args).await
}
