use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use emblem_renderer::{ExportConfig, IconError, IconExporter};
use tracing::{Level, error};

/// Writes the network emblem as icon16.png, icon48.png and icon128.png.
#[derive(Debug, Parser)]
#[command(name = "emblem-icons", version, about)]
struct Cli {
    /// Directory the PNG files are written to [default: .]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Edge length to render; repeat for several sizes [default: 16 48 128]
    #[arg(short, long = "size", value_name = "PIXELS")]
    sizes: Vec<u32>,

    /// JSON export configuration to start from
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every render step
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn export_config(&self) -> Result<ExportConfig, IconError> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };
        if let Some(out_dir) = &self.out_dir {
            config.out_dir = out_dir.clone();
        }
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    match cli.export_config().and_then(|config| IconExporter::new(config).export()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
