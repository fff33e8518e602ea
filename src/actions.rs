use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::messages::Messages;
use crate::output::relative;
use crate::plan::DeletionPlan;
use crate::util::format_bytes;

/// Result of applying a deletion plan
#[derive(Debug, Default)]
pub struct ActionResult {
    /// Number of files removed (or that would be removed under dry-run)
    pub files_removed: usize,
    /// Number of bytes reclaimed (or that would be reclaimed)
    pub bytes_reclaimed: u64,
    /// Errors encountered (path, error message)
    pub errors: Vec<(PathBuf, String)>,
}

/// Apply a deletion plan, one file at a time, in plan order.
///
/// Under dry-run each removal is only logged. A failed deletion is recorded
/// in `errors` and never counted as removed; the rest of the plan still
/// runs. Keepers are not part of the plan and are never touched here.
pub fn remove_files(
    plan: &DeletionPlan,
    root: &Path,
    dry_run: bool,
    messages: &Messages,
) -> ActionResult {
    let mut result = ActionResult::default();
    let mut current_keeper: Option<&Path> = None;

    for item in &plan.items {
        if current_keeper != Some(item.keeper.as_path()) {
            current_keeper = Some(item.keeper.as_path());
            println!(
                "\n{}: {}",
                messages.keep_label.green(),
                relative(&item.keeper, root).display()
            );
        }

        if dry_run {
            println!(
                "{} {}: {} ({})",
                messages.dry_run_tag.yellow(),
                messages.delete_label,
                relative(&item.path, root).display(),
                format_bytes(item.size)
            );
            result.files_removed += 1;
            result.bytes_reclaimed += item.size;
            continue;
        }

        match fs::remove_file(&item.path) {
            Ok(()) => {
                println!(
                    "{}: {} ({})",
                    messages.delete_label,
                    relative(&item.path, root).display(),
                    format_bytes(item.size)
                );
                result.files_removed += 1;
                result.bytes_reclaimed += item.size;
            }
            Err(e) => {
                println!(
                    "{} {}: {} ({})",
                    "[failed]".red(),
                    messages.delete_failed,
                    relative(&item.path, root).display(),
                    e
                );
                result.errors.push((item.path.clone(), e.to_string()));
            }
        }
    }

    result
}
