use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Characters that are unsafe in a directory name on at least one common
/// platform, in the order they are reported.
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Writes `prompt` without a newline and reads one line.
///
/// Returns `None` once the input is exhausted.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Result of one answer at the project selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the project list.
    Project(usize),
    Back,
    OutOfRange,
    Invalid,
}

pub fn parse_selection(input: &str, count: usize) -> Selection {
    let choice = input.trim().to_lowercase();
    if choice == "b" {
        return Selection::Back;
    }

    match choice.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= count as u64 => Selection::Project((n - 1) as usize),
        Ok(_) => Selection::OutOfRange,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Selection::OutOfRange,
            _ => Selection::Invalid,
        },
    }
}

/// Outcome of the new-project name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntry {
    Accepted(String),
    Cancelled,
    Rejected(char),
}

/// Checks a typed project name. The trimmed name is returned unchanged;
/// collisions with existing projects are left to the agent.
pub fn validate_project_name(input: &str) -> NameEntry {
    let name = input.trim();
    if name.is_empty() {
        return NameEntry::Cancelled;
    }

    match FORBIDDEN_CHARS.iter().find(|c| name.contains(**c)) {
        Some(c) => NameEntry::Rejected(*c),
        None => NameEntry::Accepted(name.to_string()),
    }
}
