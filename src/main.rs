use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use respell::corrector::FileOutcome;
use respell::{cli, config, dict, Config, CorrectionLog, SpellCorrector};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "respell")]
#[command(version, about = "Batch spelling correction for plain-text files", long_about = None)]
struct Cli {
    /// Directory containing text files to correct
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Directory where corrected copies are written
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Log every correction to the correction log (true/false)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        default_value = "false",
        value_parser = config::parse_bool,
        action = clap::ArgAction::Set
    )]
    logging: bool,

    /// Report progress on the console (true/false)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        default_value = "true",
        value_parser = config::parse_bool,
        action = clap::ArgAction::Set
    )]
    verbose: bool,

    /// Input file extension to match
    #[arg(short, long, value_name = "EXT")]
    extension: Option<String>,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short = 'L', long, value_name = "LANG")]
    language: Option<String>,

    /// Correction log file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Dictionary file (FST set) to use instead of the installed one
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Known-misspellings map (JSON object) to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    misspellings: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Download a wordlist and build its dictionary
    Download {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
    /// Update all dictionaries
    Update,
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "respell", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = Config::load(config::CliOverrides {
        output_dir: cli.output,
        extension: cli.extension,
        language: cli.language,
        log_file: cli.log_file,
        dictionary: cli.dictionary,
        misspellings: cli.misspellings,
    })?;

    // Validate the input directory before anything is touched
    let input_dir = match cli.input {
        Some(dir) => dir,
        None => anyhow::bail!("No input directory specified. Use --input <DIR>."),
    };
    if !input_dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {}", input_dir.display());
    }

    run_batch(&input_dir, &config, cli.logging, cli.verbose, !cli.no_color)
}

fn run_batch(
    input_dir: &Path,
    config: &Config,
    logging: bool,
    verbose: bool,
    colored: bool,
) -> Result<()> {
    let start = Instant::now();

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let corrector = SpellCorrector::new(config)?;
    let log = logging.then(|| CorrectionLog::new(&config.log_file));

    if verbose {
        cli::output::print_banner(colored);
    }

    let mut attempted = 0usize;
    let mut completed = 0usize;

    for input_path in discover_inputs(input_dir, &config.extension) {
        attempted += 1;

        let output_path = corrected_path(&input_path, &config.output_dir);

        // One bad file should not end the batch
        match corrector.correct_file(&input_path, &output_path, log.as_ref()) {
            Ok(FileOutcome::Converted(_)) => {
                completed += 1;
                if verbose {
                    cli::output::print_file_converted(&input_path, &output_path, colored);
                }
            }
            Ok(FileOutcome::Empty) => {
                if verbose {
                    cli::output::print_file_empty(&input_path, colored);
                }
            }
            Err(err) => {
                cli::output::print_file_failed(&input_path, &err, colored);
            }
        }
    }

    if verbose {
        cli::output::print_run_summary(completed, attempted, start.elapsed(), colored);
    }

    Ok(())
}

/// Lazily yield the regular files with the given extension directly inside
/// `input_dir`, in name order.
fn discover_inputs(input_dir: &Path, extension: &str) -> impl Iterator<Item = PathBuf> {
    let extension = extension.to_string();

    WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(move |path| {
            path.extension().and_then(|ext| ext.to_str()) == Some(extension.as_str())
        })
}

/// `input/name.ext` -> `output_dir/name--CORRECTED.ext`
fn corrected_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");

    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => output_dir.join(format!("{}--CORRECTED.{}", stem, ext)),
        None => output_dir.join(format!("{}--CORRECTED", stem)),
    }
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Download { language } => {
                dict::manager::download_dictionary(&language)?;
            }
            DictCommands::Update => {
                dict::manager::update_dictionaries()?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
