//! Line-oriented reader for the ini-like `index.theme` format.

use super::sections::Sections;
use crate::error::ParseError;

/// Parses `index.theme` text into ordered sections.
///
/// Everything from the first `#` on a line is a comment, blank lines are
/// skipped, and `[Name]` opens (or reopens) a section. Every other line must
/// be `key=value` inside a section; later values overwrite earlier ones.
pub fn parse_sections(contents: &str) -> Result<Sections, ParseError> {
    let mut sections = Sections::default();
    let mut current: Option<String> = None;

    for (idx, raw) in contents.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            sections.section_mut(name);
            current = Some(name.to_string());
            continue;
        }

        let Some(category) = current.as_deref() else {
            return Err(ParseError::AssignmentWithoutCategory { line: idx + 1 });
        };
        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::MissingEquals {
                line: idx + 1,
                content: line.to_string(),
            });
        };
        sections.set(category, key.trim(), value.trim());
    }

    Ok(sections)
}

/// Drops the comment part of a line. A `#` inside a value counts too.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Returns the name of a `[Name]` header line.
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| !name.is_empty())
}
