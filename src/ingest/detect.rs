use super::IngestError;
use regex::Regex;

/// Number of head lines scanned for the data-start row.
pub const HEAD_SCAN_LINES: usize = 10;

/// Field delimiter of the EddyHL export format.
const DELIMITER: char = ',';

/// Splits a line into trimmed cells, dropping empty and whitespace-only ones.
pub(super) fn split_cells(line: &str) -> Vec<&str> {
    line.split(DELIMITER)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Locates the data-start row: the first line in the head region whose cells
/// are all bare real numbers and whose cell count is nonzero.
///
/// Requiring every cell to be numeric is what keeps a header line with one
/// stray number token (e.g. "Channel 1, 2024") out of the data region.
pub(super) fn find_data_start(lines: &[&str]) -> Result<usize, IngestError> {
    // Optional minus sign, digits, optional fraction. No exponents, no
    // thousands separators, no surrounding text.
    let numeric = Regex::new(r"^-?\d+(\.\d+)?$").expect("Hardcode regex pattern");
    lines
        .iter()
        .take(HEAD_SCAN_LINES)
        .position(|line| {
            let cells = split_cells(line);
            !cells.is_empty() && cells.iter().all(|cell| numeric.is_match(cell))
        })
        .ok_or(IngestError::DataStartNotFound(HEAD_SCAN_LINES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_of(lines: &[&str]) -> usize {
        find_data_start(lines).unwrap()
    }

    #[test]
    fn test_start_found_after_any_header_size() {
        // 0, 1, 5 and 9 descriptive lines ahead of the same data region.
        for header_lines in [0, 1, 5, 9] {
            let mut lines = vec!["EddyHL descriptive text"; header_lines];
            lines.push("1.5,0.2");
            lines.push("1.6,0.3");
            assert_eq!(start_of(&lines), header_lines);
        }
    }

    #[test]
    fn test_start_past_scan_window_is_not_found() {
        let mut lines = vec!["descriptive"; HEAD_SCAN_LINES];
        lines.push("1.5,0.2");
        assert_eq!(
            find_data_start(&lines).unwrap_err(),
            IngestError::DataStartNotFound(HEAD_SCAN_LINES)
        );
    }

    #[test]
    fn test_mixed_header_line_is_not_data() {
        // A bare number amid text tokens must not start the data region.
        let lines = ["Channel 1, 2024", "1.5,0.2"];
        assert_eq!(start_of(&lines), 1);
    }

    #[test]
    fn test_negative_and_integer_cells() {
        let lines = ["-3,0.25"];
        assert_eq!(start_of(&lines), 0);
    }

    #[test]
    fn test_exponent_notation_is_not_numeric() {
        let lines = ["1e5,2.0", "1.5,0.2"];
        assert_eq!(start_of(&lines), 1);
    }

    #[test]
    fn test_empty_cells_are_dropped_before_the_test() {
        // Trailing delimiter leaves an empty cell, which does not disqualify.
        let lines = ["1.5,0.2,"];
        assert_eq!(start_of(&lines), 0);
    }

    #[test]
    fn test_blank_line_is_not_data() {
        let lines = ["", "  ,  ", "1.5,0.2"];
        assert_eq!(start_of(&lines), 2);
    }
}
