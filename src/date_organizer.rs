use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use colored::Colorize;

use crate::messages::Messages;
use crate::organizer;
use crate::output::relative;
use crate::scanner::{self, ScanOptions};

/// Granularity of the date buckets files are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatePattern {
    Year,
    YearMonth,
    YearMonthDay,
}

impl DatePattern {
    pub fn as_str(self) -> &'static str {
        match self {
            DatePattern::Year => "year",
            DatePattern::YearMonth => "year-month",
            DatePattern::YearMonthDay => "year-month-day",
        }
    }

    /// Bucket folder name for a modification time, in local time.
    fn folder_name(self, timestamp: SystemTime) -> String {
        let datetime: DateTime<Local> = timestamp.into();
        let format = match self {
            DatePattern::Year => "%Y",
            DatePattern::YearMonth => "%Y-%m",
            DatePattern::YearMonthDay => "%Y-%m-%d",
        };
        datetime.format(format).to_string()
    }
}

/// Move files into folders named after their modification date.
pub fn organize_by_date(
    root: &Path,
    pattern: DatePattern,
    dry_run: bool,
    recursive: bool,
    messages: &Messages,
) -> io::Result<()> {
    let mut mode = String::new();
    if dry_run {
        mode.push(' ');
        mode.push_str(messages.dry_run_mode);
    }
    if recursive {
        mode.push(' ');
        mode.push_str(messages.recursive_mode);
    }
    println!(
        "--- {} ({}){} ---",
        messages.date_start,
        root.display(),
        mode
    );
    println!("{}: {}", messages.pattern_label, pattern.as_str());

    let options = ScanOptions {
        recursive,
        ..ScanOptions::default()
    };
    let files = scanner::scan_directory(root, &options)?;

    if files.is_empty() {
        println!("{}", messages.no_files_to_organize);
        return Ok(());
    }

    for file in &files {
        let Some(modified) = file.modified else {
            eprintln!(
                "{} {}: {}",
                "warning:".yellow().bold(),
                messages.no_mtime,
                relative(&file.path, root).display()
            );
            continue;
        };

        let folder = pattern.folder_name(modified);

        if let Err(e) = organizer::move_into(root, &file.path, &folder, dry_run, messages) {
            eprintln!(
                "{} {} ({})",
                "warning:".yellow().bold(),
                relative(&file.path, root).display(),
                e
            );
        }
    }

    println!("\n{}", messages.organize_completed);
    Ok(())
}
