//! Read-only inputs to generation.
//!
//! The random stream and the room template set are the only things the
//! generator consumes besides its configuration. Both are injectable so tests
//! can substitute a replayable sequence or hand-written templates.
mod rng;
mod templates;

pub use rng::{PcgRng, RngOracle, SequenceRng};
pub use templates::{RoomTemplate, RoomTemplateLibrary, TemplateError};
