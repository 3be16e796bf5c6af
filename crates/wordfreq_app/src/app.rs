use std::io::{self, Write};

use wordfreq_engine::{Engine, EngineError, LogProgressSink, WordReport};
use wordfreq_logging::{wf_error, wf_info};

use crate::chart;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    FetchFailed,
    StartupFailed,
    CountFailed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Rendered
    }
}

/// Runs the whole pipeline and writes either the chart or a single error
/// line to `out`.
pub fn run(config: &AppConfig, out: &mut impl Write) -> io::Result<Outcome> {
    wf_info!(
        "Counting words of {} with {} workers (top {})",
        config.url,
        config.workers,
        config.top_n
    );
    let engine = Engine::new(config.engine_config());
    let result = engine.run_blocking(&config.url, &LogProgressSink);
    report(result, config.top_n, out)
}

fn report(
    result: Result<WordReport, EngineError>,
    top_n: usize,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    match result {
        Ok(report) => {
            wf_info!(
                "Rendering top {} of {} distinct words from {}",
                top_n,
                report.table.len(),
                report.final_url
            );
            out.write_all(chart::render(&report.table, top_n).as_bytes())?;
            Ok(Outcome::Rendered)
        }
        Err(err) if err.is_fetch_failure() => {
            wf_error!("Fetch failed: {}", err);
            writeln!(out, "Error fetching text: {err}")?;
            Ok(Outcome::FetchFailed)
        }
        Err(err) if err.is_runtime_failure() => {
            wf_error!("Engine failed to start: {}", err);
            writeln!(out, "Error starting engine: {err}")?;
            Ok(Outcome::StartupFailed)
        }
        Err(err) => {
            wf_error!("Counting failed: {}", err);
            writeln!(out, "Error counting words: {err}")?;
            Ok(Outcome::CountFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use wordfreq_core::CountError;
    use wordfreq_engine::EngineError;

    use super::{report, run, Outcome};
    use crate::config::AppConfig;

    #[test]
    fn fetch_failure_prints_one_line_and_nothing_else() {
        let config = AppConfig {
            url: "not a url".to_string(),
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::FetchFailed);
        assert_eq!(text.lines().count(), 1, "{text}");
        assert!(text.starts_with("Error fetching text: invalid url"), "{text}");
        assert!(!text.contains("Most Frequent"));
    }

    #[test]
    fn worker_failure_is_reported_as_counting_error() {
        let err = EngineError::Count(CountError::WorkerPanicked {
            chunk: 1,
            message: "boom".to_string(),
        });
        let mut out = Vec::new();
        let outcome = report(Err(err), 10, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::CountFailed);
        assert!(!outcome.is_success());
        assert_eq!(text, "Error counting words: worker for chunk 1 failed: boom\n");
    }

    #[test]
    fn runtime_failure_has_its_own_message() {
        let err = EngineError::Runtime("no threads".to_string());
        let mut out = Vec::new();
        let outcome = report(Err(err), 10, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::StartupFailed);
        assert_eq!(text, "Error starting engine: failed to start runtime: no threads\n");
    }
}
