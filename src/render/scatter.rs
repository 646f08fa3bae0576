use crate::ingest::SampleTable;
use crate::session::IndexRange;

/// Keep every Nth row of the applied slice. Fixed render-performance
/// constant of the scatter view; the line plot never decimates.
pub const DECIMATION_STEP: usize = 10;

/// Fixed display bounds of the scatter x axis.
pub const X_BOUNDS: (f64, f64) = (-5.0, 5.0);

/// Grid step of the scatter x axis.
pub const X_GRID_STEP: f64 = 1.0;

/// Fixed display bounds of the scatter y axis.
pub const Y_BOUNDS: (f64, f64) = (-2.5, 2.5);

/// Grid step of the scatter y axis.
pub const Y_GRID_STEP: f64 = 0.5;

/// Equal-length coordinate sequences for the scatter view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterPoints {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl ScatterPoints {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Slices the table to the applied range, both bounds inclusive, and keeps
/// rows at offsets 0, 10, 20, ... within the slice.
///
/// `applied` must come from the reducer: normalized and within the table's
/// bounds.
pub fn scatter_points(table: &SampleTable, applied: IndexRange) -> ScatterPoints {
    let mut points = ScatterPoints::default();
    for index in (applied.start..=applied.end).step_by(DECIMATION_STEP) {
        let (y, x) = table.row(index);
        points.xs.push(x);
        points.ys.push(y);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::detect_and_parse;

    fn table_of(rows: usize) -> SampleTable {
        let content: String = (0..rows).map(|i| format!("{}.0,{}.5\n", i, i)).collect();
        detect_and_parse(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_keeps_every_tenth_row_of_the_slice() {
        let table = table_of(100);
        let points = scatter_points(&table, IndexRange { start: 5, end: 47 });
        // Table indices 5, 15, 25, 35, 45 and no others.
        assert_eq!(points.ys, vec![5.0, 15.0, 25.0, 35.0, 45.0]);
        assert_eq!(points.xs, vec![5.5, 15.5, 25.5, 35.5, 45.5]);
    }

    #[test]
    fn test_range_shorter_than_step_keeps_only_its_start() {
        // 10 rows with the full range applied: offsets 0 and 10 would be
        // kept, but 10 is past the end, so only index 0 survives.
        let table = table_of(10);
        let points = scatter_points(&table, IndexRange { start: 0, end: 9 });
        assert_eq!(points.len(), 1);
        assert_eq!((points.ys[0], points.xs[0]), (0.0, 0.5));
    }

    #[test]
    fn test_single_row_range() {
        let table = table_of(20);
        let points = scatter_points(&table, IndexRange { start: 7, end: 7 });
        assert_eq!(points.ys, vec![7.0]);
    }

    #[test]
    fn test_idempotent() {
        let table = table_of(50);
        let applied = IndexRange { start: 3, end: 42 };
        assert_eq!(scatter_points(&table, applied), scatter_points(&table, applied));
    }
}
