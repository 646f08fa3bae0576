//! Data products handed to the plotting layer.
//!
//! Everything here is a pure function of the ingested table and the applied
//! range: invoking a product twice with the same inputs yields identical
//! sequences, which is what lets the host re-evaluate every frame.

pub mod scatter;

use crate::ingest::SampleTable;

/// Column name to full value sequence pairs for the overlaid line plot,
/// drawn against a 0-based integer index axis. Never decimated.
pub fn line_traces(table: &SampleTable) -> [(&'static str, &[f64]); 2] {
    table.columns()
}
