use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::messages::Messages;
use crate::output::relative;
use crate::plan::DeletionPlan;
use crate::util::{format_bytes, format_number};

/// Operator's answer to the deletion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
    /// Anything that is not a clear yes or no. Treated as cancellation.
    Invalid,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Present the deletion plan and ask the operator for a yes/no answer.
///
/// The answer is read as one line from `input` (locked stdin in production,
/// a buffer in tests), trimmed and lowercased. `yes`/`y` confirms, `no`/`n`
/// cancels, everything else - including empty input and EOF - counts as an
/// invalid response and cancels.
pub fn confirm_deletion<R: BufRead>(
    plan: &DeletionPlan,
    root: &Path,
    messages: &Messages,
    input: &mut R,
) -> io::Result<Confirmation> {
    let separator = "=".repeat(60);

    println!("\n{}", separator);
    println!("  {}", messages.confirm_title.bold());
    println!("{}", separator);
    println!(
        "{}: {}",
        messages.files_to_delete,
        format_number(plan.total_count).cyan()
    );
    println!(
        "{}: {}",
        messages.space_to_save,
        format_bytes(plan.total_size).yellow()
    );
    println!("\n{}", messages.files_list_title);

    for (i, item) in plan.items.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            relative(&item.path, root).display(),
            format_bytes(item.size)
        );
        println!(
            "   {}: {}",
            messages.kept_file,
            relative(&item.keeper, root).display()
        );
        if (i + 1) % 5 == 0 && i < plan.items.len() - 1 {
            println!();
        }
    }

    println!("\n{}", separator);
    print!("{}", messages.confirm_prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;

    let answer = match response.trim().to_lowercase().as_str() {
        "yes" | "y" => {
            println!("{}", messages.executing);
            Confirmation::Confirmed
        }
        "no" | "n" => {
            println!("{}", messages.cancelled);
            Confirmation::Cancelled
        }
        _ => {
            println!("{}", messages.invalid_response.yellow());
            Confirmation::Invalid
        }
    };

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::DeletionItem;
    use std::path::PathBuf;

    fn plan_with_items(n: usize) -> DeletionPlan {
        let mut plan = DeletionPlan::default();
        for i in 0..n {
            plan.items.push(DeletionItem {
                path: PathBuf::from(format!("/root/dup{i}.txt")),
                size: 10,
                keeper: PathBuf::from("/root/keep.txt"),
            });
            plan.total_count += 1;
            plan.total_size += 10;
        }
        plan
    }

    fn answer(input: &str) -> Confirmation {
        let plan = plan_with_items(2);
        let messages = Messages::english();
        let mut reader = input.as_bytes();
        confirm_deletion(&plan, Path::new("/root"), &messages, &mut reader).unwrap()
    }

    #[test]
    fn test_yes_confirms() {
        assert_eq!(answer("yes\n"), Confirmation::Confirmed);
        assert_eq!(answer("y\n"), Confirmation::Confirmed);
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        assert_eq!(answer("  YES  \n"), Confirmation::Confirmed);
        assert_eq!(answer("No\n"), Confirmation::Cancelled);
    }

    #[test]
    fn test_no_cancels() {
        assert_eq!(answer("no\n"), Confirmation::Cancelled);
        assert_eq!(answer("n\n"), Confirmation::Cancelled);
    }

    #[test]
    fn test_anything_else_is_invalid() {
        assert_eq!(answer("maybe\n"), Confirmation::Invalid);
        assert_eq!(answer("\n"), Confirmation::Invalid);
    }

    #[test]
    fn test_eof_is_invalid() {
        assert_eq!(answer(""), Confirmation::Invalid);
    }

    #[test]
    fn test_only_confirmed_allows_execution() {
        assert!(Confirmation::Confirmed.is_confirmed());
        assert!(!Confirmation::Cancelled.is_confirmed());
        assert!(!Confirmation::Invalid.is_confirmed());
    }
}
