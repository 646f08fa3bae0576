use super::detect::split_cells;
use super::IngestError;

/// Name of column 0, the first logger channel.
pub const VALUE_Y: &str = "value_y";

/// Name of column 1, the second logger channel.
pub const VALUE_X: &str = "value_x";

/// Minimum number of cells a data row must carry.
const MIN_COLUMNS: usize = 2;

/// The ingested two-column numeric table.
///
/// Column order is fixed by the export format, not inferred: column 0 is
/// `value_y`, column 1 is `value_x`. Holds at least one row; both columns
/// always have equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable {
    value_y: Vec<f64>,
    value_x: Vec<f64>,
}

impl SampleTable {
    pub fn row_count(&self) -> usize {
        self.value_y.len()
    }

    /// Largest valid row index.
    pub fn max_index(&self) -> usize {
        self.row_count() - 1
    }

    pub fn value_y(&self) -> &[f64] {
        &self.value_y
    }

    pub fn value_x(&self) -> &[f64] {
        &self.value_x
    }

    /// Column name/values pairs, in column order.
    pub fn columns(&self) -> [(&'static str, &[f64]); 2] {
        [(VALUE_Y, &self.value_y), (VALUE_X, &self.value_x)]
    }

    /// The `(value_y, value_x)` pair at a row index.
    pub fn row(&self, index: usize) -> (f64, f64) {
        (self.value_y[index], self.value_x[index])
    }
}

/// Parses every line of the data region into a table.
///
/// `offset` is the 0-based index of the region's first line within the file,
/// used to report 1-based file line numbers in errors. Any empty line, short
/// row or unparseable cell fails the pass; cells past column 1 are discarded.
pub(super) fn parse_rows(lines: &[&str], offset: usize) -> Result<SampleTable, IngestError> {
    let mut value_y = Vec::with_capacity(lines.len());
    let mut value_x = Vec::with_capacity(lines.len());
    let mut widest = MIN_COLUMNS;
    for (index, line) in lines.iter().enumerate() {
        let file_line = offset + index + 1;
        let cells = split_cells(line);
        if cells.is_empty() {
            return Err(IngestError::EmptyLine(file_line));
        }
        if cells.len() < MIN_COLUMNS {
            return Err(IngestError::InsufficientColumns {
                line: file_line,
                found: cells.len(),
            });
        }
        widest = widest.max(cells.len());
        value_y.push(parse_cell(cells[0], file_line)?);
        value_x.push(parse_cell(cells[1], file_line)?);
    }
    if widest > MIN_COLUMNS {
        tracing::debug!(columns = widest, "discarded columns past the second");
    }
    // find_data_start only returns indices of data rows, so the region is
    // never empty here.
    debug_assert!(!value_y.is_empty());
    Ok(SampleTable { value_y, value_x })
}

fn parse_cell(cell: &str, line: usize) -> Result<f64, IngestError> {
    cell.parse().map_err(|_| IngestError::MalformedCell {
        line,
        value: cell.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let table = parse_rows(&["1.5,0.2", "-1.5,-0.2"], 3).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0), (1.5, 0.2));
        assert_eq!(table.row(1), (-1.5, -0.2));
    }

    #[test]
    fn test_column_names_are_fixed() {
        let table = parse_rows(&["1.0,2.0"], 0).unwrap();
        let [(first, _), (second, _)] = table.columns();
        assert_eq!(first, VALUE_Y);
        assert_eq!(second, VALUE_X);
    }

    #[test]
    fn test_error_lines_are_one_based_file_lines() {
        // Region starting at file line 4 (offset 3), bad cell on its 2nd row.
        let result = parse_rows(&["1.5,0.2", "nan?,0.3"], 3);
        assert_eq!(
            result.unwrap_err(),
            IngestError::MalformedCell { line: 5, value: "nan?".to_owned() }
        );
    }

    #[test]
    fn test_short_row_fails() {
        let result = parse_rows(&["1.5,0.2", "1.6"], 0);
        assert_eq!(
            result.unwrap_err(),
            IngestError::InsufficientColumns { line: 2, found: 1 }
        );
    }
}
