//! Word list files
//!
//! Plain text, one word per line. Blank lines and `#` comments are ignored,
//! and so is any entry that is not a playable word.

use crate::core::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Read a word list file
///
/// # Errors
///
/// Returns the I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_host::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    fs::read_to_string(path).map(|content| parse_lines(&content))
}

fn parse_lines(content: &str) -> WordList {
    WordList::from_strs(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_blanks_and_invalid_entries() {
        let words = parse_lines("# header\n\nreact\n  swift  \nnot-a-word\nUNITY\nabc\n");
        assert_eq!(words.to_strings(), ["REACT", "SWIFT", "UNITY"]);
    }

    #[test]
    fn duplicates_collapse() {
        let words = parse_lines("scala\nSCALA\n scala \n");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let path = std::env::temp_dir().join(format!("wordle_host_{}.txt", std::process::id()));
        fs::write(&path, "scala\nreact\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.to_strings(), ["SCALA", "REACT"]);
    }
}
