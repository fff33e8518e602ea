use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use crate::grouping::DuplicateGroup;
use crate::messages::Messages;

/// One file slated for removal, with the copy that stays behind.
#[derive(Debug, Clone)]
pub struct DeletionItem {
    pub path: PathBuf,
    pub size: u64,
    pub keeper: PathBuf,
}

/// The reviewable list of removals, built once and consumed once.
#[derive(Debug, Clone, Default)]
pub struct DeletionPlan {
    pub items: Vec<DeletionItem>,
    pub total_count: usize,
    pub total_size: u64,
}

impl DeletionPlan {
    /// Build a plan from duplicate groups: the first member of each group is
    /// the keeper, every other member becomes a removal candidate.
    ///
    /// Sizes are re-read from the filesystem here so the plan reflects the
    /// state at build time. A file that vanished since grouping is skipped
    /// with a warning rather than failing the whole build.
    pub fn build(groups: &[DuplicateGroup], messages: &Messages) -> Self {
        let mut plan = Self::default();

        for group in groups {
            let Some(keeper) = group.files.first() else {
                continue;
            };

            for file in &group.files[1..] {
                let size = match fs::metadata(&file.path) {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        eprintln!(
                            "{} {}: {} ({})",
                            "warning:".yellow().bold(),
                            messages.size_read_failed,
                            file.path.display(),
                            e
                        );
                        continue;
                    }
                };

                plan.items.push(DeletionItem {
                    path: file.path.clone(),
                    size,
                    keeper: keeper.path.clone(),
                });
                plan.total_count += 1;
                plan.total_size += size;
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
