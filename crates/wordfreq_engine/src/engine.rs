use std::sync::Arc;

use wordfreq_core::{count_words, CountError, Tokenizer, WordTokenizer, DEFAULT_WORKERS};
use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::decode::decode_html;
use crate::extract::{Extractor, VisibleTextExtractor};
use crate::fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{EngineEvent, FetchError, RunProgress, Stage, WordReport};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Count(#[from] CountError),
    #[error("counting task did not finish: {0}")]
    Join(String),
    #[error("failed to start runtime: {0}")]
    Runtime(String),
}

impl EngineError {
    /// True when the page could not be downloaded.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, EngineError::Fetch(_))
    }

    /// True when the engine could not start its runtime.
    pub fn is_runtime_failure(&self) -> bool {
        matches!(self, EngineError::Runtime(_))
    }
}

/// Fetch, extract, tokenize and count for a single page.
pub struct Engine {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    tokenizer: Arc<dyn Tokenizer>,
    workers: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(
            Arc::new(ReqwestFetcher::new(config.fetch)),
            Arc::new(VisibleTextExtractor),
            config.workers,
        )
    }

    pub fn with_parts(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn Extractor>,
        workers: usize,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            tokenizer: Arc::new(WordTokenizer),
            workers,
        }
    }

    pub async fn run(&self, url: &str, sink: &dyn ProgressSink) -> Result<WordReport, EngineError> {
        let output = self.fetcher.fetch(url, sink).await?;

        sink.emit(EngineEvent::Progress(RunProgress {
            bytes: Some(output.metadata.byte_len),
            ..RunProgress::stage(Stage::Decoding)
        }));
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref());
        wf_debug!("Decoded page as {}", decoded.encoding_label);

        sink.emit(EngineEvent::Progress(RunProgress::stage(Stage::Extracting)));
        let text = self.extractor.extract(&decoded.html);

        sink.emit(EngineEvent::Progress(RunProgress::stage(Stage::Tokenizing)));
        let tokens = self.tokenizer.tokenize(&text);
        let token_count = tokens.len() as u64;

        sink.emit(EngineEvent::Progress(RunProgress {
            tokens: Some(token_count),
            ..RunProgress::stage(Stage::Counting)
        }));
        let workers = self.workers;
        let table = tokio::task::spawn_blocking(move || count_words(&tokens, workers))
            .await
            .map_err(|err| {
                wf_warn!("Counting task aborted: {}", err);
                EngineError::Join(err.to_string())
            })??;

        sink.emit(EngineEvent::Progress(RunProgress {
            tokens: Some(token_count),
            ..RunProgress::stage(Stage::Done)
        }));
        wf_info!(
            "{}: {} tokens, {} distinct",
            output.metadata.final_url,
            token_count,
            table.len()
        );

        Ok(WordReport {
            final_url: output.metadata.final_url,
            token_count,
            workers,
            table,
        })
    }

    /// Runs [`Engine::run`] to completion on a fresh multi-thread runtime.
    pub fn run_blocking(
        &self,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WordReport, EngineError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| EngineError::Runtime(err.to_string()))?;
        runtime.block_on(self.run(url, sink))
    }
}
