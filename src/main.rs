use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use app_summary_pdf::ReportBuilder;

/// Writes the static Overgangsdashboard app-summary PDF.
///
/// Fonts are resolved from `APP_SUMMARY_FONTS_DIR`, the bundled
/// `assets/fonts` directory, or the system DejaVu fonts, in that order.
#[derive(Parser)]
#[command(author, version, about = "Generates the Overgangsdashboard app-summary PDF")]
struct Cli {
    /// Output path for the generated PDF. Parent directories are created.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let builder = ReportBuilder::app_summary();

    let result = match cli.output {
        Some(path) => builder.write_to(&path).map(|_| path),
        None => builder.write_to_default(),
    };

    match result {
        Ok(path) => println!("{}", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
