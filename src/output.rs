use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::grouping::DuplicateGroup;
use crate::messages::Messages;
use crate::util::{format_bytes, format_number};

/// Statistics about duplicate files found
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateStats {
    /// Total number of files scanned
    pub total_files: usize,
    /// Number of groups of identical files
    pub duplicate_groups: usize,
    /// Total number of files that are duplicates
    pub duplicate_files: usize,
    /// Total wasted space in bytes (could be reclaimed)
    pub wasted_bytes: u64,
}

/// A group of duplicate files for output
#[derive(Debug, Clone, Serialize)]
pub struct ReportGroup {
    /// Hex digest shared by every file in this group
    pub hash: String,
    /// Size of each file in this group
    pub size: u64,
    /// Paths to all duplicate files, keeper first
    pub files: Vec<PathBuf>,
}

/// Complete report of duplicate findings
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    pub stats: DuplicateStats,
    pub groups: Vec<ReportGroup>,
}

impl DuplicateReport {
    /// Build a report from duplicate groups
    pub fn from_groups(duplicate_groups: &[DuplicateGroup], total_files: usize) -> Self {
        let mut groups = Vec::with_capacity(duplicate_groups.len());
        let mut wasted_bytes: u64 = 0;
        let mut duplicate_files: usize = 0;

        for group in duplicate_groups {
            // All files in a group have identical content, hence equal size
            let size = group.files.first().map(|f| f.size).unwrap_or(0);
            let file_count = group.files.len();

            duplicate_files += file_count;
            // Wasted space = size * (count - 1), since we keep one copy
            wasted_bytes += size * (file_count.saturating_sub(1)) as u64;

            groups.push(ReportGroup {
                hash: group.hash.to_hex().to_string(),
                size,
                files: group.files.iter().map(|f| f.path.clone()).collect(),
            });
        }

        let stats = DuplicateStats {
            total_files,
            duplicate_groups: groups.len(),
            duplicate_files,
            wasted_bytes,
        };

        Self { stats, groups }
    }

    /// Output as human-readable colored text, paths shown relative to `root`
    pub fn print_human(&self, root: &Path, messages: &Messages) {
        if self.groups.is_empty() {
            println!("\n{}", messages.no_duplicates.green());
            return;
        }

        println!("\n{}", messages.result_title.bold());
        println!(
            "{}: {}",
            messages.scanned,
            format_number(self.stats.total_files).cyan()
        );
        println!(
            "{}: {}",
            messages.duplicate_groups,
            format_number(self.stats.duplicate_groups).cyan()
        );
        println!(
            "{}: {}",
            messages.duplicate_files,
            format_number(self.stats.duplicate_files).cyan()
        );

        for (i, group) in self.groups.iter().enumerate() {
            let wasted = group.size * (group.files.len().saturating_sub(1)) as u64;

            let header = format!(
                "--- {} {} ({} {}, {}: {}...) ---",
                messages.group,
                format_number(i + 1),
                format_number(group.files.len()),
                messages.files_unit,
                messages.hash_label,
                &group.hash[..8]
            );
            println!("\n{}", header.bold());
            println!(
                "{}: {}",
                messages.file_size,
                format_bytes(group.size).yellow()
            );
            println!(
                "{}: {}",
                messages.wasted_space,
                format_bytes(wasted).yellow()
            );

            for path in &group.files {
                println!("  - {}", relative(path, root).display());
            }
        }

        println!(
            "\n{}: {}",
            messages.total_wasted,
            format_bytes(self.stats.wasted_bytes).yellow().bold()
        );
    }

    /// Output as JSON
    pub fn print_json(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
    }
}

/// Strip `root` from a path for display; foreign paths stay absolute.
pub fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
