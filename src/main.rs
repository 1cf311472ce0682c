// Command-line entry point for the equivalence engine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hedgehog_equiv::api::server;
use hedgehog_equiv::application::AnalyzeUsecase;
use hedgehog_equiv::domain::{EquivalenceChecker, NamedFragment};
use hedgehog_equiv::infrastructure::{concurrency, logging, FixtureLoader, JsonExporter, TextExporter};
use hedgehog_equiv::ports::ReportExporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Worker threads for parallel comparison (default: half the cores)
    #[arg(short = 'j', long, global = true, env = "HEDGEHOG_THREADS")]
    threads: Option<usize>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two fragments of a fixture
    Compare {
        /// Fixture JSON file
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        left: String,
        #[arg(long)]
        right: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Group equivalent fragments of a fixture
    Duplicates {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Report if statements and conditionals with identical branches
    Inspect {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Serve COMPARE requests over JSON lines
    Serve {
        #[arg(short, long, default_value_t = 7878, env = "HEDGEHOG_PORT")]
        port: u16,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl Format {
    fn exporter(self) -> &'static dyn ReportExporter {
        match self {
            Format::Text => &TextExporter,
            Format::Json => &JsonExporter,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    concurrency::init_thread_pool(cli.threads)?;

    let output = match cli.command {
        Command::Serve { port } => return server::start_server(port),
        Command::Compare {
            file,
            left,
            right,
            format,
        } => run(&file, format, |usecase, fragments| {
            usecase.compare(fragments, &left, &right)
        })?,
        Command::Duplicates { file, format } => {
            run(&file, format, |usecase, fragments| usecase.duplicates(fragments))?
        }
        Command::Inspect { file, format } => {
            run(&file, format, |usecase, fragments| usecase.inspect(fragments))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn run<F>(file: &Path, format: Format, action: F) -> Result<String>
where
    F: FnOnce(&AnalyzeUsecase<'_>, &[NamedFragment]) -> Result<String>,
{
    let fixture = FixtureLoader::load_file(file)
        .with_context(|| format!("Failed to load fixture {}", file.display()))?;
    let symbols = fixture.symbol_table();
    let usecase = AnalyzeUsecase {
        checker: EquivalenceChecker::new(&symbols),
        exporter: format.exporter(),
    };
    action(&usecase, &fixture.fragments)
}
