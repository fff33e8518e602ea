use std::io::{self, BufRead};
use std::path::Path;

use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::actions::{self, ActionResult};
use crate::confirm;
use crate::grouping::{self, DuplicateGroup};
use crate::hasher;
use crate::messages::Messages;
use crate::output::DuplicateReport;
use crate::plan::DeletionPlan;
use crate::scanner::{self, ScanOptions};
use crate::util::{format_bytes, format_number};

/// Options shared by the duplicate commands.
#[derive(Debug, Clone, Default)]
pub struct DedupOptions {
    pub recursive: bool,
    pub min_size: Option<u64>,
    pub exclude: Vec<String>,
    pub no_progress: bool,
}

/// Stage 1-3 of both duplicate commands: collect, fingerprint, group.
///
/// Returns the duplicate groups in scan order plus the number of files
/// scanned. `quiet` suppresses the stdout narration (JSON mode owns stdout).
fn detect(
    root: &Path,
    options: &DedupOptions,
    quiet: bool,
    messages: &Messages,
) -> io::Result<(Vec<DuplicateGroup>, usize)> {
    if !quiet {
        println!("--- {} ({}) ---", messages.detect_start, root.display());
    }

    let scan_options = ScanOptions {
        recursive: options.recursive,
        min_size: options.min_size,
        exclude: build_exclude(&options.exclude)?,
    };
    let files = scanner::scan_directory(root, &scan_options)?;

    if files.is_empty() {
        if !quiet {
            println!("{}", messages.no_files);
        }
        return Ok((Vec::new(), 0));
    }

    let total = files.len();
    if !quiet {
        println!("{}: {}", messages.file_count, format_number(total).cyan());
        println!("{}", messages.calculating);
    }

    let hashed = hasher::hash_files(files, !options.no_progress, messages);
    let groups = grouping::group_by_digest(hashed);

    Ok((groups, total))
}

/// Find duplicate files and build the report; printing is the caller's call.
pub fn find_duplicates(
    root: &Path,
    options: &DedupOptions,
    quiet: bool,
    messages: &Messages,
) -> io::Result<DuplicateReport> {
    let (groups, total_files) = detect(root, options, quiet, messages)?;
    Ok(DuplicateReport::from_groups(&groups, total_files))
}

/// Remove duplicate files, keeping the first copy of every group.
///
/// Shows the detection report first, then builds the deletion plan. In
/// interactive non-dry-run mode the plan must be confirmed through `input`
/// before anything is deleted; a declined or invalid answer ends the run
/// without touching the filesystem.
pub fn remove_duplicates<R: BufRead>(
    root: &Path,
    options: &DedupOptions,
    dry_run: bool,
    interactive: bool,
    messages: &Messages,
    input: &mut R,
) -> io::Result<()> {
    let (groups, total_files) = detect(root, options, false, messages)?;

    let report = DuplicateReport::from_groups(&groups, total_files);
    report.print_human(root, messages);

    if groups.is_empty() {
        return Ok(());
    }

    let plan = DeletionPlan::build(&groups, messages);
    if plan.is_empty() {
        // Every candidate vanished between grouping and planning
        return Ok(());
    }

    if interactive && !dry_run {
        let answer = confirm::confirm_deletion(&plan, root, messages, input)?;
        if !answer.is_confirmed() {
            return Ok(());
        }
    }

    if dry_run {
        println!("\n--- {} {} ---", messages.removal_start, messages.dry_run_mode);
    } else {
        println!("\n--- {} ---", messages.removal_start);
    }

    let result = actions::remove_files(&plan, root, dry_run, messages);
    print_summary(&result, dry_run, messages);

    Ok(())
}

fn print_summary(result: &ActionResult, dry_run: bool, messages: &Messages) {
    println!("\n--- {} ---", messages.summary_title);

    let (count_label, size_label) = if dry_run {
        (messages.would_removed_count, messages.would_space_saved)
    } else {
        (messages.removed_count, messages.space_saved)
    };

    println!(
        "{}: {}",
        count_label,
        format_number(result.files_removed).cyan()
    );
    println!(
        "{}: {}",
        size_label,
        format_bytes(result.bytes_reclaimed).yellow()
    );

    if !result.errors.is_empty() {
        println!(
            "{}: {}",
            messages.failed_count.red(),
            format_number(result.errors.len())
        );
    }
}

/// Compile `--exclude` patterns into one matcher.
fn build_exclude(patterns: &[String]) -> io::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        builder.add(glob);
    }

    let set = builder
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(Some(set))
}
