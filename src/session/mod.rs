//! Interaction state scoped to one uploaded file: the upload identity, the
//! candidate and applied index ranges, and the reducer that advances them.
//!
//! The host UI re-runs a full evaluation pass per interaction, so all state
//! transitions go through [`ViewerState::apply`], a pure function of the
//! previous state and one event.

mod range;
mod state;

pub use range::IndexRange;
pub use state::{Bound, Event, UploadStamp, ViewerState};
