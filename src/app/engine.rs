use crate::app::demos::{self, Pattern};
use crate::config::toml_config::DemoConfig;
use crate::core::{DemoReport, Result};

pub struct DemoEngine {
    config: DemoConfig,
}

impl DemoEngine {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Runs the patterns in order. The first failing demo ends the run.
    pub fn run(&self, patterns: &[Pattern]) -> Result<Vec<DemoReport>> {
        tracing::info!("Running {} pattern demo(s)", patterns.len());

        let mut reports = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            tracing::debug!("Running {} demo", pattern);
            let report = demos::run(*pattern, &self.config).inspect_err(|e| {
                tracing::error!("{} demo failed: {}", pattern, e);
            })?;
            tracing::info!("{} demo produced {} line(s)", pattern, report.lines.len());
            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ModelConfig;

    #[test]
    fn test_runs_patterns_in_requested_order() {
        let engine = DemoEngine::new(DemoConfig::default());
        let reports = engine
            .run(&[Pattern::Strategy, Pattern::Builder])
            .unwrap();
        let names: Vec<&str> = reports.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(names, vec!["strategy", "builder"]);
    }

    #[test]
    fn test_failing_demo_ends_run() {
        let mut config = DemoConfig::default();
        config.adapter.models.push(ModelConfig {
            provider: "huggingface".to_string(),
            model_name: "Mistral7b".to_string(),
            quantization_method: Some("bitsandbytes".to_string()),
            method: "query".to_string(),
        });
        let engine = DemoEngine::new(config);
        assert!(engine.run(&[Pattern::Builder, Pattern::Adapter]).is_err());
        assert_eq!(engine.run(&[Pattern::Builder]).unwrap().len(), 1);
    }
}
