//! Markdown title extraction
//!
//! A markdown file's display title is its first heading line. Anything else
//! (other extensions, unreadable files, no heading) falls back to the file
//! name, with `.md` stripped for markdown files.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Files larger than this are not read for a title.
const MAX_FILE_SIZE: u64 = 1_000_000;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s*(.+)$").expect("HEADING regex is invalid"));

/// Display title for the file at `path`.
pub fn extract_title(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return name;
    }

    read_markdown(path)
        .and_then(|content| first_heading(&content))
        .unwrap_or_else(|| name.strip_suffix(".md").unwrap_or(&name).to_string())
}

fn read_markdown(path: &Path) -> Option<String> {
    if let Ok(metadata) = path.metadata() {
        if metadata.len() > MAX_FILE_SIZE {
            return None;
        }
    }
    std::fs::read_to_string(path).ok()
}

/// Text of the first `# ...` line, trimmed. A heading of only spaces gives
/// an empty title.
pub fn first_heading(content: &str) -> Option<String> {
    let caps = HEADING.captures(content)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_heading() {
        assert_eq!(first_heading("# Widget Guide\nbody"), Some("Widget Guide".into()));
        assert_eq!(
            first_heading("intro\n\n#   Spaced Title  \n# Second"),
            Some("Spaced Title".into())
        );
        assert_eq!(first_heading("#NoSpace"), Some("NoSpace".into()));
        assert_eq!(first_heading("no heading here"), None);
    }

    #[test]
    fn test_first_heading_needs_line_start() {
        assert_eq!(first_heading("text # not a heading"), None);
    }

    #[test]
    fn test_first_heading_blank_title() {
        assert_eq!(first_heading("intro\n#   "), Some(String::new()));
    }

    #[test]
    fn test_extract_title_blank_heading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.md");
        fs::write(&path, "no title yet\n#   ").unwrap();
        assert_eq!(extract_title(&path), "");
    }

    #[test]
    fn test_first_heading_crlf() {
        assert_eq!(first_heading("# Windows\r\nbody"), Some("Windows".into()));
    }

    #[test]
    fn test_extract_title_markdown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.md");
        fs::write(&path, "# Widget Guide\n\nSome text").unwrap();
        assert_eq!(extract_title(&path), "Widget Guide");
    }

    #[test]
    fn test_extract_title_markdown_without_heading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "just text").unwrap();
        assert_eq!(extract_title(&path), "notes");
    }

    #[test]
    fn test_extract_title_non_markdown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "# Looks like a heading").unwrap();
        assert_eq!(extract_title(&path), "notes.txt");
    }

    #[test]
    fn test_extract_title_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        assert_eq!(extract_title(&path), "missing");
    }

    #[test]
    fn test_extract_title_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x23, 0x20, 0x41]).unwrap();
        assert_eq!(extract_title(&path), "binary");
    }
}
