use super::range::IndexRange;
use crate::ingest::SampleTable;

/// Identity of an upload. Two uploads with the same name and byte size are
/// treated as the same file; anything else discards all derived state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadStamp {
    pub name: String,
    pub size: usize,
}

/// Which bound of the candidate range a numeric entry field edits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// One user interaction, folded into the state by [`ViewerState::apply`].
#[derive(Clone, Debug)]
pub enum Event {
    /// A slider handle moved. Adjusts the candidate range only.
    SliderMoved { start: usize, end: usize },

    /// A numeric entry field changed one candidate bound.
    BoundEdited { bound: Bound, value: usize },

    /// The explicit redraw trigger. The only event that touches the
    /// applied range.
    RedrawRequested,

    /// An upload passed the ingestion detector.
    UploadParsed { stamp: UploadStamp, table: SampleTable },

    /// An upload failed the ingestion detector.
    UploadFailed { stamp: UploadStamp },
}

/// Interaction state for the currently loaded file.
///
/// The candidate range follows every slider and field edit; the applied
/// range, which alone drives the scatter plot, changes only on an explicit
/// redraw. Both are scoped to one upload and reset when a different file
/// arrives.
#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    stamp: Option<UploadStamp>,
    table: Option<SampleTable>,
    candidate: IndexRange,
    applied: IndexRange,
}

impl ViewerState {
    pub fn table(&self) -> Option<&SampleTable> {
        self.table.as_ref()
    }

    pub fn candidate(&self) -> IndexRange {
        self.candidate
    }

    pub fn applied(&self) -> IndexRange {
        self.applied
    }

    /// Largest valid row index of the current table, 0 when none is loaded.
    pub fn max_index(&self) -> usize {
        self.table.as_ref().map(SampleTable::max_index).unwrap_or(0)
    }

    /// Folds one event into the next state.
    ///
    /// Pure: the same state and event always produce the same result, so the
    /// host may re-run a full pass on every interaction without drift.
    pub fn apply(self, event: Event) -> Self {
        match event {
            Event::SliderMoved { start, end } => Self {
                candidate: IndexRange { start, end }.clamped(self.max_index()),
                ..self
            },
            Event::BoundEdited { bound, value } => {
                let value = value.min(self.max_index());
                let mut candidate = self.candidate;
                match bound {
                    Bound::Start => candidate.start = value,
                    Bound::End => candidate.end = value,
                }
                Self { candidate, ..self }
            }
            Event::RedrawRequested => Self {
                applied: self.candidate.normalized(),
                ..self
            },
            Event::UploadParsed { stamp, table } => {
                if self.stamp.as_ref() == Some(&stamp) {
                    // Same file again: re-ingesting is idempotent, so the
                    // range state survives.
                    Self { table: Some(table), ..self }
                } else {
                    tracing::debug!(name = %stamp.name, size = stamp.size, "new upload, resetting ranges");
                    let full = IndexRange::full(table.max_index());
                    Self {
                        stamp: Some(stamp),
                        table: Some(table),
                        candidate: full,
                        applied: full,
                    }
                }
            }
            Event::UploadFailed { stamp } => Self {
                stamp: Some(stamp),
                table: None,
                candidate: IndexRange::default(),
                applied: IndexRange::default(),
            },
        }
    }
}
