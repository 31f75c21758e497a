use crate::adapters;
use crate::app::observers::{LoggerObserver, UiUpdater};
use crate::app::strategies::{AdvancedRag, NaiveRag};
use crate::config::toml_config::{
    AdapterConfig, BuilderConfig, DemoConfig, ObserverConfig, StrategyConfig,
};
use crate::core::chatbot::ChatBot;
use crate::core::notifier::OutputNotifier;
use crate::core::{DemoReport, Observer, Result, TextQuery, Transcript};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Adapter,
    Builder,
    Observer,
    Strategy,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Adapter,
        Pattern::Builder,
        Pattern::Observer,
        Pattern::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Adapter => "adapter",
            Pattern::Builder => "builder",
            Pattern::Observer => "observer",
            Pattern::Strategy => "strategy",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn run(pattern: Pattern, config: &DemoConfig) -> Result<DemoReport> {
    match pattern {
        Pattern::Adapter => run_adapter(&config.adapter),
        Pattern::Builder => Ok(run_builder(&config.builder)),
        Pattern::Observer => run_observer(&config.observer),
        Pattern::Strategy => Ok(run_strategy(&config.strategy)),
    }
}

/// Queries every configured model through the same interface.
pub fn run_adapter(config: &AdapterConfig) -> Result<DemoReport> {
    let mut report = DemoReport::new(Pattern::Adapter.as_str());
    let models = config
        .models
        .iter()
        .map(adapters::instantiate)
        .collect::<Result<Vec<_>>>()?;

    for model in &models {
        report.push(model.query(&config.prompt)?);
    }
    Ok(report)
}

pub fn run_builder(config: &BuilderConfig) -> DemoReport {
    let mut report = DemoReport::new(Pattern::Builder.as_str());
    let few_shot_query = config.few_shot.to_builder().build();
    let no_shot_query = config.no_shot.to_builder().build();
    report.push(format!("Few-shot Query: {}", few_shot_query));
    report.push(format!("No-shot Query: {}", no_shot_query));
    report
}

pub fn run_observer(config: &ObserverConfig) -> Result<DemoReport> {
    let transcript = Transcript::new();
    let logger: Rc<dyn Observer> = Rc::new(LoggerObserver::new(transcript.clone()));
    let ui_updater: Rc<dyn Observer> = Rc::new(UiUpdater::new(transcript.clone()));

    let mut notifier = OutputNotifier::new();
    notifier.add_observer(Rc::clone(&logger));
    notifier.add_observer(Rc::clone(&ui_updater));

    let mut outputs = config.outputs.iter();
    if let Some(first) = outputs.next() {
        notifier.notify(first)?;
    }

    notifier.remove_observer(&logger)?;

    for output in outputs {
        notifier.notify(output)?;
    }

    Ok(DemoReport {
        pattern: Pattern::Observer.as_str().to_string(),
        lines: transcript.take(),
    })
}

pub fn run_strategy(config: &StrategyConfig) -> DemoReport {
    let mut report = DemoReport::new(Pattern::Strategy.as_str());
    let mut bot = ChatBot::new(Box::new(NaiveRag));
    report.push(bot.get_response(&config.query));

    bot.set_strategy(Box::new(AdvancedRag));
    report.push(bot.get_response(&config.query));
    report
}
