pub mod chunking;
pub mod emitter;
pub mod error;
pub mod frame;
pub mod profile;
pub mod report;

pub use chunking::{chunk, ChunkPolicy};
pub use emitter::{ChunkEmitter, EmitOutcome, EmitterHandle};
pub use error::{StreamError, StreamResult};
pub use frame::{ChatChunk, Delta, Frame, StreamChoice, DONE_MARKER};
pub use profile::StreamProfile;
pub use report::{load_report, CLIMATE_REPORT};
