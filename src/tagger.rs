//! The tagging engine: two independent classifiers over the verse text.
//!
//! `grammar_tags` looks only at surface form (punctuation, discourse openers,
//! negation, conditionals, formulaic closings); `thematic_tags` matches
//! lexical content against the [`crate::lexicon`] tables. Both are pure
//! functions returning deduplicated, order-preserving tag lists, and neither
//! depends on the other's output.

mod grammar;
mod thematic;

pub use grammar::grammar_tags;
pub use thematic::thematic_tags;
