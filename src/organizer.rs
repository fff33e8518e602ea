use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use jwalk::WalkDir;

use crate::config::{ConfigStore, Rules};
use crate::messages::Messages;
use crate::output::relative;
use crate::scanner::{self, ScanOptions};

/// What happened to one file during organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// A different file with the same name already sits at the destination.
    Conflict,
    AlreadyInPlace,
}

/// Organize a directory using its stored rules.
pub fn run(root: &Path, dry_run: bool, recursive: bool, messages: &Messages) -> io::Result<()> {
    let store = ConfigStore::for_dir(root)?;
    let Some(rules) = store.load()? else {
        println!("{}", messages.no_config.yellow());
        return Ok(());
    };

    organize(root, &rules, dry_run, recursive, messages)
}

/// Move every matching file into its rule-determined destination folder.
///
/// Destination folders themselves are excluded from collection, so a second
/// run never re-shuffles already organized files. Keyword rules win over
/// extension rules. Files matching no rule stay where they are.
pub fn organize(
    root: &Path,
    rules: &Rules,
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
        messages.organize_start,
        root.display(),
        mode
    );

    let options = ScanOptions {
        recursive,
        min_size: None,
        exclude: destination_globs(rules)?,
    };
    let files = scanner::scan_directory(root, &options)?;

    if files.is_empty() {
        println!("{}", messages.no_files_to_organize);
        return Ok(());
    }

    for file in &files {
        let Some(filename) = file.path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        let extension = file
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        let Some(destination) = determine_destination(&filename, extension.as_deref(), rules)
        else {
            continue;
        };

        if let Err(e) = move_into(root, &file.path, destination, dry_run, messages) {
            eprintln!(
                "{} {} ({})",
                "warning:".yellow().bold(),
                relative(&file.path, root).display(),
                e
            );
        }
    }

    if recursive && !dry_run {
        cleanup_empty_directories(root, rules, messages);
    }

    println!("\n{}", messages.organize_completed);
    Ok(())
}

/// Pick a destination folder for one file name, keywords before extensions.
fn determine_destination<'a>(
    filename: &str,
    extension: Option<&str>,
    rules: &'a Rules,
) -> Option<&'a str> {
    let by_keyword = rules
        .keywords
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| filename.contains(kw.as_str())))
        .map(|(dir, _)| dir.as_str());

    by_keyword.or_else(|| {
        let extension = extension?;
        rules
            .extensions
            .iter()
            .find(|(_, extensions)| extensions.iter().any(|e| e == extension))
            .map(|(dir, _)| dir.as_str())
    })
}

/// Move `file` into `<root>/<dest_dir_name>/`, flattening its path.
///
/// Shared with the date organizer, which buckets into date-named folders.
pub fn move_into(
    root: &Path,
    file: &Path,
    dest_dir_name: &str,
    dry_run: bool,
    messages: &Messages,
) -> io::Result<MoveOutcome> {
    let filename = file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "file has no name"))?;
    let dest_dir = root.join(dest_dir_name);
    let dest = dest_dir.join(filename);
    let rel = relative(file, root);

    if dest.exists() && file != dest {
        let line = format!(
            "{}: {} -> {}/ ({})",
            messages.conflict,
            rel.display(),
            dest_dir_name,
            messages.name_exists
        );
        if dry_run {
            println!("{} {}", messages.dry_run_tag.yellow(), line.yellow());
        } else {
            println!("{}", line.yellow());
        }
        return Ok(MoveOutcome::Conflict);
    }

    if file == dest {
        if dry_run {
            println!(
                "{} {} ({})",
                messages.skip_tag.blue(),
                rel.display(),
                messages.already_in_place
            );
        }
        return Ok(MoveOutcome::AlreadyInPlace);
    }

    if dry_run {
        println!(
            "{} {} -> {}/",
            messages.dry_run_tag.yellow(),
            rel.display(),
            dest_dir_name
        );
    } else {
        fs::create_dir_all(&dest_dir)?;
        fs::rename(file, &dest)?;
        println!(
            "{}: {} -> {}/",
            messages.moved.green(),
            rel.display(),
            dest_dir_name
        );
    }

    Ok(MoveOutcome::Moved)
}

/// Compile the destination folder names into a literal-name exclusion set.
fn destination_globs(rules: &Rules) -> io::Result<Option<GlobSet>> {
    let dirs = rules.destination_dirs();
    if dirs.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for dir in &dirs {
        let glob = Glob::new(&globset::escape(dir))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        builder.add(glob);
    }

    let set = builder
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(Some(set))
}

/// Remove directories left empty by the moves, deepest first. Destination
/// folders and the root itself are exempt.
fn cleanup_empty_directories(root: &Path, rules: &Rules, messages: &Messages) {
    let destinations: HashSet<String> = rules.destination_dirs().into_iter().collect();

    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.path())
        .filter(|path| path != root)
        .filter(|path| {
            path.file_name()
                .map(|name| !destinations.contains(name.to_string_lossy().as_ref()))
                .unwrap_or(true)
        })
        .collect();

    dirs.sort();

    // Children sort after their parents, so walking in reverse empties
    // nested directories before their now-empty parents are considered.
    for dir in dirs.iter().rev() {
        let is_empty = fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);

        if is_empty && fs::remove_dir(dir).is_ok() {
            println!(
                "{}: {}/ ({})",
                messages.cleaned,
                relative(dir, root).display(),
                messages.removed_empty_dir
            );
        }
    }
}
