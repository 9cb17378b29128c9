mod annotated;
mod verse;

pub use annotated::AnnotatedVerse;
pub use verse::{RecordError, VerseRecord};
