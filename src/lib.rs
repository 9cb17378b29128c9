pub mod canon;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod tagger;
pub mod utils;
pub mod writer;

pub use models::{AnnotatedVerse, RecordError, VerseRecord};
pub use pipeline::{FatalError, Options, Summary};
pub use writer::WriteOptions;
