pub mod config;
pub mod dataset;
pub mod lexicon;
pub mod normalize;
pub mod restorer;
pub mod score;
pub mod script;
pub mod segment;
pub mod select;

#[cfg(test)]
pub mod testing;

pub use config::SegmentConfig;
pub use lexicon::{Lexicon, LexiconBuilder, LexiconError};
pub use lexicon::source::{FrequencyList, JsonDictionary, MemorySource, WordSource};
pub use restorer::{SpaceRestorer, SpaceRestorerBuilder};
pub use segment::{GreedySegmenter, OptimalSegmenter, Segmenter};
