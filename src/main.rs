use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use clinote::{
    AppState, MemoryStore, ReportDocument, analyze_transcript, read_transcript_file, serve,
    write_report_json,
};

#[derive(Parser)]
#[command(name = "clinote")]
#[command(author, version, about = "Medical transcript analysis pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript file and emit the structured results
    Analyze {
        /// Input transcript text file
        #[arg(short, long)]
        input: PathBuf,

        /// Patient name used for the report header
        #[arg(long, default_value = "Patient")]
        patient_name: String,

        /// Output file for the combined analysis (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for a human-readable report (text)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Serve the analysis API over HTTP
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            patient_name,
            output,
            report,
            verbose,
        } => {
            setup_logging(verbose);
            run_analyze(input, patient_name, output, report)
        }
        Commands::Serve { addr, verbose } => {
            setup_logging(verbose);
            run_serve(addr).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_analyze(
    input: PathBuf,
    patient_name: String,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript_file(&input).context("Failed to load input transcript")?;

    let analysis = analyze_transcript(&transcript, &patient_name);
    info!(
        "Extracted {} symptoms, {} treatments, {} keywords; sentiment {}",
        analysis.medical_analysis.symptoms.len(),
        analysis.medical_analysis.treatment.len(),
        analysis.medical_analysis.keywords.len(),
        analysis.sentiment_analysis.sentiment
    );

    match &output {
        Some(path) => {
            write_report_json(&analysis, path)?;
            info!("Analysis written to {:?}", path);
        }
        None => {
            let json = serde_json::to_string_pretty(&analysis)
                .context("Failed to serialize analysis")?;
            println!("{}", json);
        }
    }

    if let Some(path) = &report {
        let document = ReportDocument::new(&analysis, &transcript, &patient_name);
        document.write_file(path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

async fn run_serve(addr: String) -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);
    serve(&addr, state).await
}
