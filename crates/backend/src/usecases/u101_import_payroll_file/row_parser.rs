//! Line-level parsing of the uploaded payroll text file.
//!
//! Pure functions; persistence and accounting live in the executor.

use super::field_schema::PAYROLL_FIELDS;

/// Field delimiter used by the upstream payroll file producer
pub const FIELD_DELIMITER: char = '$';

/// A single parsed line, carrying exactly one value per schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub values: Vec<String>,
}

impl ParsedRow {
    /// True when every mapped value is empty after trimming, i.e. the line
    /// consisted of delimiters and whitespace only
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// The natural-key values captured in skipped-row diagnostics
    pub fn key_values(&self, n: usize) -> Vec<String> {
        self.values.iter().take(n).cloned().collect()
    }
}

/// Split the payload into raw lines. Handles both CRLF and LF terminators;
/// the trailing CR of CRLF lines is stripped later by the per-line trim.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Map one raw line onto the field schema.
///
/// Returns `None` for a blank line (empty after trimming). Otherwise each
/// positional token is trimmed and assigned by index; missing trailing
/// tokens become empty strings so the row always has exactly
/// `PAYROLL_FIELDS.len()` values.
pub fn parse_line(raw: &str) -> Option<ParsedRow> {
    let line = raw.trim_end_matches('\r').trim();
    if line.is_empty() {
        return None;
    }

    let mut tokens = line.split(FIELD_DELIMITER);
    let values: Vec<String> = (0..PAYROLL_FIELDS.len())
        .map(|_| tokens.next().unwrap_or("").trim().to_string())
        .collect();

    Some(ParsedRow { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u101_import_payroll_file::field_schema::NATURAL_KEY_LEN;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\r"), None);
        assert_eq!(parse_line(" \t \r"), None);
    }

    #[test]
    fn test_short_line_pads_trailing_fields() {
        let row = parse_line("2024$01$1234567890123$$$").unwrap();
        assert_eq!(row.values.len(), PAYROLL_FIELDS.len());
        assert_eq!(row.values[0], "2024");
        assert_eq!(row.values[1], "01");
        assert_eq!(row.values[2], "1234567890123");
        for value in &row.values[3..] {
            assert_eq!(value, "");
        }
        assert!(!row.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let row = parse_line(" 2024 $ 01 $  PC100 ").unwrap();
        assert_eq!(row.values[0], "2024");
        assert_eq!(row.values[1], "01");
        assert_eq!(row.values[2], "PC100");
    }

    #[test]
    fn test_delimiter_only_line_is_empty_row() {
        let row = parse_line("$$$$$").unwrap();
        assert!(row.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = split_lines("A$B$C\r\nD$E$F\r\n");
        assert_eq!(lines.len(), 3);
        let row = parse_line(lines[0]).unwrap();
        assert_eq!(row.values[2], "C");
        assert_eq!(parse_line(lines[2]), None);
    }

    #[test]
    fn test_excess_tokens_are_dropped() {
        let long_line = vec!["x"; PAYROLL_FIELDS.len() + 5].join("$");
        let row = parse_line(&long_line).unwrap();
        assert_eq!(row.values.len(), PAYROLL_FIELDS.len());
    }

    #[test]
    fn test_key_values() {
        let row = parse_line("2024$01$PC100$extra").unwrap();
        assert_eq!(row.key_values(NATURAL_KEY_LEN), vec!["2024", "01", "PC100"]);
    }
}
