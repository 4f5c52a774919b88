use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use zipf_analyzer::{
    analyze_word_counts_with_custom_config, make_analysis_id, write_ranked_points_csv,
    AnalysisResult, DocumentIngestor, Error, IngestedDocument, ZipfAnalyzerConfig,
    DEFAULT_TOP_N_WORDS,
};

enum OutputFormat {
    Summary,
    Csv,
    Json,
}

struct CliOptions {
    top_n_words: usize,
    output_format: OutputFormat,
    path: Option<String>,
}

const USAGE: &str = "Usage: zipf-analyzer-cli [--top N] [--csv | --json] [PATH]";

fn main() {
    // Initialize the logger
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        error!("Error analyzing document: {}", e);
        std::process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        top_n_words: DEFAULT_TOP_N_WORDS,
        output_format: OutputFormat::Summary,
        path: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--top" => {
                let value = args.next().ok_or("--top requires a value")?;
                options.top_n_words = value
                    .parse()
                    .map_err(|_| format!("Invalid --top value: {}", value))?;
            }
            "--csv" => options.output_format = OutputFormat::Csv,
            "--json" => options.output_format = OutputFormat::Json,
            _ if arg.starts_with("--") => return Err(format!("Unknown option: {}", arg)),
            _ => {
                if options.path.replace(arg).is_some() {
                    return Err("Only one input path may be given".to_string());
                }
            }
        }
    }

    Ok(options)
}

fn run(options: &CliOptions) -> Result<(), Error> {
    let ingestor = DocumentIngestor::default();

    let (id, document) = match &options.path {
        Some(path) => {
            let bytes = fs::read(path)?;
            let name = Path::new(path)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(path.as_str());

            let last_modified_millis = fs::metadata(path)?
                .modified()
                .ok()
                .and_then(|modified| modified.duration_since(std::time::UNIX_EPOCH).ok())
                .map_or(0, |duration| duration.as_millis() as u64);

            let id = make_analysis_id(name, bytes.len() as u64, last_modified_millis);
            (id, ingestor.ingest(name, "", &bytes)?)
        }
        None => {
            // Read the input text from stdin
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;

            let id = make_analysis_id("stdin", input.len() as u64, 0);
            (id, ingestor.ingest_text("stdin", "text/plain", &input))
        }
    };

    let IngestedDocument {
        word_counts,
        source_info,
    } = document;

    info!(
        "Analyzing {} unique words from {}",
        word_counts.len(),
        source_info.name
    );

    let config = ZipfAnalyzerConfig {
        top_n_words: options.top_n_words,
    };
    let result = analyze_word_counts_with_custom_config(&config, id, source_info, word_counts)?;

    match options.output_format {
        OutputFormat::Summary => print_summary(&result),
        OutputFormat::Csv => write_ranked_points_csv(result.ranked_points(), io::stdout().lock())?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| Error::Other(format!("Failed to serialize result: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let source_info = result.source_info();
    let fit_metrics = result.fit_metrics();

    println!("Source: {} ({} bytes)", source_info.name, source_info.size_bytes);
    if let (Some(word_count), Some(unique_word_count)) =
        (source_info.word_count, source_info.unique_word_count)
    {
        println!("Words: {} total, {} unique", word_count, unique_word_count);
    }

    println!("Slope: {:.4}", fit_metrics.slope);
    println!("Intercept: {:.4}", fit_metrics.intercept);
    println!("R²: {:.4}", fit_metrics.r_squared);

    println!("Top words:");
    for word_count in result.top_words() {
        println!("{}: {}", word_count.word, word_count.count);
    }
}
