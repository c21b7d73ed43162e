use std::error::Error;
use std::fs;
use std::path::PathBuf;

use booking_pdf::fonts::{DEFAULT_FAMILY_NAME, FONTS_DIR_ENV};
use booking_pdf::{BookingRecord, ConfirmationBuilder, FontProvider};
use clap::Parser;

/// Renders a booking confirmation PDF from a JSON booking record.
///
/// The record is a JSON object with any of the keys `bookingId`, `customerName`,
/// `customerEmail`, `type`, `destination`, `bookingDate`, `amount` and `status`.
/// Missing keys are printed as `N/A`.
#[derive(Parser)]
#[command(author, version, about = "Render booking confirmation PDFs")]
struct Cli {
    /// Booking record as inline JSON, or `@<path>` to read it from a file.
    record: String,

    /// Path of the PDF to write; missing parent directories are created.
    output: PathBuf,

    /// Directory holding a TrueType family to embed instead of the built-in Helvetica.
    #[arg(long, value_name = "DIR", env = FONTS_DIR_ENV)]
    fonts_dir: Option<PathBuf>,

    /// Family name of the fonts in `--fonts-dir`.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FAMILY_NAME)]
    font_family: String,

    /// Brand named in the title and closing lines.
    #[arg(long)]
    brand: Option<String>,

    /// Symbol printed in front of the amount.
    #[arg(long)]
    currency: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let record = BookingRecord::from_json(&read_record(&cli.record)?)?;

    let mut builder = ConfirmationBuilder::new();
    if let Some(directory) = cli.fonts_dir {
        builder = builder.with_font_provider(FontProvider::directory(directory, cli.font_family));
    }
    if let Some(brand) = cli.brand {
        builder = builder.with_brand(brand);
    }
    if let Some(currency) = cli.currency {
        builder = builder.with_currency_symbol(currency);
    }

    let path = builder.write(&record, &cli.output)?;
    println!("PDF generated successfully at {}", path.display());
    Ok(())
}

fn read_record(argument: &str) -> Result<String, Box<dyn Error>> {
    match argument.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)
            .map_err(|err| format!("Failed to read booking record from {path}: {err}"))?),
        None => Ok(argument.to_owned()),
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
