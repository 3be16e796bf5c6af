//! Wordfreq engine: page fetching, text extraction and the counting pipeline.
mod decode;
mod engine;
mod extract;
mod fetch;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use engine::{Engine, EngineConfig, EngineError};
pub use extract::{Extractor, VisibleTextExtractor};
pub use fetch::{
    FetchSettings, Fetcher, LogProgressSink, NullProgressSink, ProgressSink, ReqwestFetcher,
};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RunProgress, Stage,
    WordReport,
};
