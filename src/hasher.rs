use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use colored::Colorize;
use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::messages::Messages;
use crate::scanner::FileEntry;

/// Read buffer for streaming hashes (64KB)
const READ_BUF_SIZE: usize = 64 * 1024;

/// A file together with its content fingerprint
#[derive(Debug, Clone)]
pub struct HashedFile {
    pub entry: FileEntry,
    pub hash: blake3::Hash,
}

/// Compute the Blake3 hash of entire file contents
fn hash_file(path: &Path) -> io::Result<blake3::Hash> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; READ_BUF_SIZE];

    let mut hasher = blake3::Hasher::new();

    // Read in chunks
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}

/// Hash every file in parallel, preserving input order.
///
/// Input order decides which file later becomes the keeper of a duplicate
/// group, so results come back in the same order files went in. A file that
/// cannot be read is reported on stderr and dropped from the result; the
/// scan continues over the remaining files.
pub fn hash_files(
    files: Vec<FileEntry>,
    show_progress: bool,
    messages: &Messages,
) -> Vec<HashedFile> {
    let progress = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Option<HashedFile>> = files
        .into_par_iter()
        .map(|entry| {
            let result = hash_file(&entry.path);
            progress.inc(1);

            match result {
                Ok(hash) => Some(HashedFile { entry, hash }),
                Err(e) => {
                    progress.suspend(|| {
                        eprintln!(
                            "{} {}: {} ({})",
                            "warning:".yellow().bold(),
                            messages.hash_failed,
                            entry.path.display(),
                            e
                        );
                    });
                    None
                }
            }
        })
        .collect();

    progress.finish_and_clear();

    results.into_iter().flatten().collect()
}
