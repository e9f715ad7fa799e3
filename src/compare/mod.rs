mod config;
mod engine;
mod outcome;
mod progress;
mod source;

pub use config::{CompareConfig, DEFAULT_CHUNK_SIZE};
pub use engine::{Comparator, compare_files};
pub use outcome::{CompareOutcome, Side};
pub use progress::{NoProgress, ProgressObserver};
pub use source::{ByteSource, FileSource};
