//! Bank instruction file writers.
//!
//! Downstream rails parse these files positionally; column layout and chunk
//! sizes are fixed and must not drift.

pub mod csv;
pub mod txt;

pub use csv::{CSV_HEADERS, csv_string, write_csv};
pub use txt::{TXT_FIELD_COUNT, instruction_line, write_txt};

/// Split `text` into `count` chunks of at most `size` characters each,
/// padding the tail with empty strings. Characters beyond `size * count`
/// are dropped.
pub(crate) fn chunk_padded(text: &str, size: usize, count: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    (0..count)
        .map(|i| {
            chars
                .get(i * size..((i + 1) * size).min(chars.len()))
                .unwrap_or(&[])
                .iter()
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_padded() {
        assert_eq!(chunk_padded("abcdef", 3, 3), vec!["abc", "def", ""]);
        assert_eq!(chunk_padded("ab", 3, 3), vec!["ab", "", ""]);
        assert_eq!(chunk_padded("", 3, 2), vec!["", ""]);
        // Overflow past the last chunk is dropped.
        assert_eq!(chunk_padded("abcdefgh", 3, 2), vec!["abc", "def"]);
    }
}
