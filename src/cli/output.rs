use colored::*;
use std::path::Path;
use std::time::Duration;

pub fn print_banner(colored: bool) {
    println!();
    if colored {
        println!("{}", "------------------------------".dimmed());
        println!("{}", "Spelling correction starting".bold());
        println!("{}", "------------------------------".dimmed());
    } else {
        println!("------------------------------");
        println!("Spelling correction starting");
        println!("------------------------------");
    }
    println!();
}

pub fn print_file_converted(input: &Path, output: &Path, colored: bool) {
    if colored {
        println!(
            "    {}\t{} {} {}",
            "*".green().bold(),
            input.display(),
            ">>>".dimmed(),
            output.display().to_string().cyan()
        );
    } else {
        println!("    *\t{} >>> {}", input.display(), output.display());
    }
}

pub fn print_file_empty(input: &Path, colored: bool) {
    let message = format!(
        "No text was found in {}. Nothing to convert.",
        input.display()
    );
    if colored {
        println!("  {} {}", "*".yellow().bold(), message.yellow());
    } else {
        println!("  * {}", message);
    }
}

pub fn print_file_failed(input: &Path, err: &anyhow::Error, colored: bool) {
    if colored {
        eprintln!(
            "  {} Failed to process {}: {:#}",
            "✗".red().bold(),
            input.display(),
            err
        );
    } else {
        eprintln!("  ✗ Failed to process {}: {:#}", input.display(), err);
    }
}

pub fn print_run_summary(completed: usize, attempted: usize, elapsed: Duration, colored: bool) {
    let minutes = elapsed.as_secs_f64() / 60.0;
    let counts = format!("{} of {}", completed, attempted);
    let files_word = if attempted == 1 { "file" } else { "files" };

    println!();
    if colored {
        println!("{}", "--------------------------------------------".dimmed());
        println!("{}", "Conversion complete".bold());
        println!(
            "{} {} converted in {} minutes",
            counts.green().bold(),
            files_word,
            format!("{:.3}", minutes).cyan()
        );
        println!("{}", "--------------------------------------------".dimmed());
    } else {
        println!("--------------------------------------------");
        println!("Conversion complete");
        println!("{} {} converted in {:.3} minutes", counts, files_word, minutes);
        println!("--------------------------------------------");
    }
    println!();
}
