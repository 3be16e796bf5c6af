//! Wordfreq core: tokenization and the partitioned map-reduce word count.
mod count;
mod partition;
mod table;
mod token;

pub use count::{count_chunk, count_with, count_words, CountError};
pub use partition::partition;
pub use table::{aggregate, FrequencyTable};
pub use token::{tokenize, Tokenizer, WordTokenizer};

/// Number of workers used when nothing else is configured.
pub const DEFAULT_WORKERS: usize = 4;
