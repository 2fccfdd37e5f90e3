//! Word list loading utilities
//!
//! Reads newline-separated word lists and normalises entries into the form the
//! dictionary stores: trimmed, uppercase, 2-18 ASCII letters.

use std::fs;
use std::io;
use std::path::Path;

/// Shortest word the dictionary accepts
pub const MIN_LEN: usize = 2;

/// Longest word the dictionary accepts (a whole rack)
pub const MAX_LEN: usize = 18;

/// Normalise one raw entry
///
/// Returns `None` for blank lines, words outside 2-18 letters, or anything
/// containing a non-letter.
///
/// # Examples
/// ```
/// use spellstacks::dictionary::loader::normalize;
///
/// assert_eq!(normalize("  garden \r"), Some("GARDEN".to_string()));
/// assert_eq!(normalize("a"), None);
/// assert_eq!(normalize("don't"), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !(MIN_LEN..=MAX_LEN).contains(&trimmed.len())
        || !trimmed.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use spellstacks::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_trims() {
        assert_eq!(normalize("crane"), Some("CRANE".to_string()));
        assert_eq!(normalize("\tStone  "), Some("STONE".to_string()));
    }

    #[test]
    fn normalize_enforces_length_bounds() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("I"), None);
        assert_eq!(normalize("an"), Some("AN".to_string()));
        assert_eq!(normalize(&"a".repeat(18)), Some("A".repeat(18)));
        assert_eq!(normalize(&"a".repeat(19)), None);
    }

    #[test]
    fn normalize_rejects_non_letters() {
        assert_eq!(normalize("ice-cream"), None);
        assert_eq!(normalize("h2o"), None);
        assert_eq!(normalize("two words"), None);
        assert_eq!(normalize("café"), None);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("definitely/not/a/real/wordlist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "spellstacks-loader-test-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "garden\n\nwinter\r\nno-go\nsummer\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, ["GARDEN", "WINTER", "SUMMER"]);
    }
}
