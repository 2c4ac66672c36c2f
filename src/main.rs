//! folio - assemble a themed document from a JSON manifest

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use folio::{Error, FontProvider, InstalledFonts, Manifest, render_text};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The document graph as JSON
    Json,
    /// One line per paragraph
    Text,
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Assemble a themed document from a JSON manifest", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio report.json                   Print the document graph as JSON
    folio report.json -f text           Print the document as plain text
    folio report.json -o report.out     Write the output to a file")]
struct Cli {
    /// Manifest describing the document
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Resolve fonts against an empty font set instead of the system's fonts
    #[arg(long)]
    no_system_fonts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let manifest = Manifest::from_path(&cli.manifest)?;
    let template = manifest.to_template(font_provider(cli.no_system_fonts))?;
    let document = template.build()?;

    let rendered = match cli.format {
        Format::Json => serde_json::to_string_pretty(&document)?,
        Format::Text => render_text(&document),
    };

    match &cli.output {
        Some(path) => write_output(path, &rendered),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn write_output(path: &Path, rendered: &str) -> Result<(), Error> {
    fs::write(path, rendered)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(feature = "system-fonts")]
fn font_provider(no_system_fonts: bool) -> Arc<dyn FontProvider> {
    if no_system_fonts {
        Arc::new(InstalledFonts::new())
    } else {
        Arc::new(folio_traits::SystemFontProvider::new())
    }
}

#[cfg(not(feature = "system-fonts"))]
fn font_provider(_no_system_fonts: bool) -> Arc<dyn FontProvider> {
    Arc::new(InstalledFonts::new())
}
