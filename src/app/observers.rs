use crate::core::{LogEntry, Observer, Result, Transcript};
use chrono::Utc;
use std::cell::RefCell;

/// Saves every output it is notified of, with the time it arrived.
#[derive(Debug, Default)]
pub struct LoggerObserver {
    transcript: Transcript,
    entries: RefCell<Vec<LogEntry>>,
}

impl LoggerObserver {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }
}

impl Observer for LoggerObserver {
    fn name(&self) -> &str {
        "logger"
    }

    fn update(&self, llm_output: &str) -> Result<()> {
        self.transcript
            .push(format!("Logger: Saving LLM output to logs: {}", llm_output));
        self.entries.borrow_mut().push(LogEntry {
            recorded_at: Utc::now(),
            output: llm_output.to_string(),
        });
        tracing::info!("Saved LLM output ({} chars)", llm_output.len());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct UiUpdater {
    transcript: Transcript,
}

impl UiUpdater {
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl Observer for UiUpdater {
    fn name(&self) -> &str {
        "ui"
    }

    fn update(&self, llm_output: &str) -> Result<()> {
        self.transcript
            .push(format!("UI: Displaying LLM output to the user: {}", llm_output));
        Ok(())
    }
}
