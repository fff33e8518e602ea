use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::ConfigStore;
use crate::messages::Messages;

/// Interactively edit and save the organization rules for a directory.
///
/// Two prompts, one per rule kind, both in `items:dir` syntax. Empty input
/// keeps whatever is already configured.
pub fn run<R: BufRead>(root: &Path, messages: &Messages, input: &mut R) -> io::Result<()> {
    let store = ConfigStore::for_dir(root)?;
    let mut rules = store.load()?.unwrap_or_default();

    println!("--- {} ({}) ---", messages.setup_title, root.display());

    println!("\n{}", messages.ext_rules_title);
    if let Some(parsed) = prompt_rules(&rules.extensions, messages, input)? {
        rules.extensions = parsed;
    }

    println!("\n{}", messages.kw_rules_title);
    if let Some(parsed) = prompt_rules(&rules.keywords, messages, input)? {
        rules.keywords = parsed;
    }

    store.save(&rules)?;
    println!(
        "\n{} {}: {}",
        "✓".green(),
        messages.config_saved,
        store.path().display()
    );

    Ok(())
}

/// Show the current rules and read a replacement line. `None` keeps current.
fn prompt_rules<R: BufRead>(
    current: &BTreeMap<String, Vec<String>>,
    messages: &Messages,
    input: &mut R,
) -> io::Result<Option<BTreeMap<String, Vec<String>>>> {
    println!("{}: {}", messages.current_config, format_rules(current, messages));
    print!("{}", messages.input_prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_rule_input(line)))
}

/// Parse `jpg,png:images pdf:docs` into folder -> items. Malformed parts
/// are dropped.
fn parse_rule_input(input: &str) -> BTreeMap<String, Vec<String>> {
    let mut rules = BTreeMap::new();

    for part in input.split_whitespace() {
        let Some((items, dir)) = part.split_once(':') else {
            continue;
        };
        if dir.is_empty() {
            continue;
        }

        let items: Vec<String> = items
            .split(',')
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if !items.is_empty() {
            rules.insert(dir.to_string(), items);
        }
    }

    rules
}

fn format_rules(map: &BTreeMap<String, Vec<String>>, messages: &Messages) -> String {
    if map.is_empty() {
        return messages.none.to_string();
    }

    map.iter()
        .map(|(dir, items)| format!("{}:{}", items.join(","), dir))
        .collect::<Vec<_>>()
        .join(" ")
}
