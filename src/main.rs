mod actions;
mod config;
mod confirm;
mod date_organizer;
mod detector;
mod grouping;
mod hasher;
mod messages;
mod organizer;
mod output;
mod plan;
mod scanner;
mod setup;
mod util;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::date_organizer::DatePattern;
use crate::detector::DedupOptions;
use crate::messages::Messages;

#[derive(Parser, Debug)]
#[command(name = "tidy")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Organize files into folders using the configured rules
    Run {
        /// Directory to organize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Preview changes without actually moving files
        #[arg(long)]
        dry_run: bool,

        /// Process files in subdirectories recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Interactively set up organization rules for a directory
    Setup {
        /// Directory the rules apply to
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Organize files into folders named after their modification date
    OrganizeByDate {
        /// Directory to organize
        path: PathBuf,

        /// Date bucket granularity
        #[arg(long, value_enum, default_value_t = DatePattern::YearMonth)]
        pattern: DatePattern,

        /// Preview changes without actually moving files
        #[arg(long)]
        dry_run: bool,

        /// Process files in subdirectories recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Find duplicate files by content
    FindDuplicates {
        /// Directory to scan for duplicates
        path: PathBuf,

        /// Scan subdirectories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Glob patterns for file or directory names to skip
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Minimum file size in bytes to consider (smaller files are skipped)
        #[arg(short = 's', long)]
        min_size: Option<u64>,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Remove duplicate files, keeping the first copy of each
    RemoveDuplicates {
        /// Directory to scan for duplicates
        path: PathBuf,

        /// Scan subdirectories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Preview deletions without removing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(long)]
        no_confirm: bool,

        /// Glob patterns for file or directory names to skip
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Minimum file size in bytes to consider (smaller files are skipped)
        #[arg(short = 's', long)]
        min_size: Option<u64>,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let messages = Messages::from_env();

    match dispatch(cli.command, &messages) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command, messages: &Messages) -> io::Result<()> {
    match command {
        Command::Run {
            path,
            dry_run,
            recursive,
        } => organizer::run(&path, dry_run, recursive, messages),

        Command::Setup { path } => {
            let stdin = io::stdin();
            setup::run(&path, messages, &mut stdin.lock())
        }

        Command::OrganizeByDate {
            path,
            pattern,
            dry_run,
            recursive,
        } => date_organizer::organize_by_date(&path, pattern, dry_run, recursive, messages),

        Command::FindDuplicates {
            path,
            recursive,
            format,
            exclude,
            min_size,
            no_progress,
        } => {
            let options = DedupOptions {
                recursive,
                min_size,
                exclude,
                no_progress,
            };

            // JSON mode owns stdout; the narration would corrupt it
            let quiet = matches!(format, OutputFormat::Json);
            let report = detector::find_duplicates(&path, &options, quiet, messages)?;

            match format {
                OutputFormat::Human => report.print_human(&path, messages),
                OutputFormat::Json => report.print_json(),
            }
            Ok(())
        }

        Command::RemoveDuplicates {
            path,
            recursive,
            dry_run,
            no_confirm,
            exclude,
            min_size,
            no_progress,
        } => {
            let options = DedupOptions {
                recursive,
                min_size,
                exclude,
                no_progress,
            };
            let stdin = io::stdin();

            detector::remove_duplicates(
                &path,
                &options,
                dry_run,
                !no_confirm,
                messages,
                &mut stdin.lock(),
            )
        }
    }
}
