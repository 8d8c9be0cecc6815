//! Extract command - pull the Form-16 fields out of a single file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use form16_core::{
    ExtractionReport, ExtractionResult, Form16Config, Form16Extractor, Form16Parser, PdfExtractor,
    PdfProcessor,
};

use super::config::{default_config_path, load_or_default};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF, or plain text already extracted from one)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List fields whose label was not found
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header row plus one record)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => load_or_default(Path::new(path))?,
        None => load_or_default(&default_config_path())?,
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Processing file: {}", args.input.display());

    let text = match extension.as_str() {
        "pdf" => read_pdf_text(&args.input, &config)?,
        "txt" => fs::read_to_string(&args.input)?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    let report = Form16Extractor::new().extract_report(&text)?;
    let output = format_result(&report.result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing {
        print_missing(&report);
    }

    Ok(())
}

fn read_pdf_text(path: &Path, config: &Form16Config) -> anyhow::Result<String> {
    let data = fs::read(path)?;

    let mut pdf = PdfExtractor::with_config(config.pdf.clone());
    pdf.load(&data)?;
    let content = pdf.extract_content()?;

    debug!(
        "Extracted {} chars from {} pages ({:?})",
        content.text.len(),
        content.page_count,
        content.pdf_type
    );

    Ok(content.text)
}

fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            wtr.serialize(result)?;
            let data = wtr.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
            Ok(String::from_utf8(data)?.trim_end().to_string())
        }
        OutputFormat::Text => {
            let width = result.iter().map(|(f, _)| f.key().len()).max().unwrap_or(0);
            let lines: Vec<String> = result
                .iter()
                .map(|(field, value)| format!("{:<width$}  {}", field.key(), value, width = width))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn print_missing(report: &ExtractionReport) {
    eprintln!();
    if report.missing.is_empty() {
        eprintln!("{} All fields found", style("✓").green());
    } else {
        eprintln!(
            "{} {} field(s) not found:",
            style("⚠").yellow(),
            report.missing.len()
        );
        for field in &report.missing {
            eprintln!("  - {}", field);
        }
    }
    eprintln!(
        "{} Processing time: {}ms",
        style("ℹ").blue(),
        report.processing_time_ms
    );
}
