//! # EddyHL CSV Viewer
//!
//! A small interactive viewer for CSV exports produced by the EddyHL
//! data-logging tool. The user opens one file; the viewer renders a
//! time-series line plot of both channels and an XY scatter plot of a
//! user-selected, decimated index range.
//!
//! ## Features
//!
//! - **Encoding detection**: Uploads are decoded by trying UTF-8 with BOM,
//!   cp932 (Shift-JIS) and plain UTF-8 in order; a decode that would
//!   replace malformed bytes is treated as a failure
//! - **Data-start detection**: The header region of an EddyHL export varies
//!   in size and content across producer versions; the first line whose
//!   fields are all bare real numbers marks the start of the data region
//! - **Fixed two-column schema**: Column 0 is `value_y`, column 1 is
//!   `value_x`; extra columns are discarded positionally
//! - **Decoupled range selection**: Slider and field edits adjust a
//!   candidate range; the scatter plot only follows an explicit redraw,
//!   so scrubbing never triggers a replot
//! - **All-or-nothing passes**: A malformed data row fails the whole
//!   ingestion pass with a typed error instead of a partial parse
//!
//! ## Module layout
//!
//! - [`ingest`]: decodes upload bytes, locates the data region and parses
//!   it into a two-column table
//! - [`session`]: upload identity, candidate/applied ranges and the event reducer
//! - [`render`]: the data products handed to the plotting layer
//! - [`app`]: the egui shell wiring widgets to the reducer

pub mod app;
pub mod error;
pub mod ingest;
pub mod render;
pub mod session;
