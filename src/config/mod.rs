pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::demos::Pattern;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    Adapter,
    Builder,
    Observer,
    Strategy,
    All,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "llm-patterns")]
#[command(about = "Adapter, Builder, Observer and Strategy examples for LLM queries")]
pub struct CliConfig {
    /// Examples to run, in order
    #[arg(value_enum, default_value = "all")]
    pub patterns: Vec<PatternArg>,

    /// TOML file overriding the sample inputs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Selected patterns with `all` expanded and repeats dropped.
    pub fn selected_patterns(&self) -> Vec<Pattern> {
        let mut selected = Vec::new();
        for arg in &self.patterns {
            let patterns: &[Pattern] = match arg {
                PatternArg::Adapter => &[Pattern::Adapter],
                PatternArg::Builder => &[Pattern::Builder],
                PatternArg::Observer => &[Pattern::Observer],
                PatternArg::Strategy => &[Pattern::Strategy],
                PatternArg::All => &Pattern::ALL,
            };
            for pattern in patterns {
                if !selected.contains(pattern) {
                    selected.push(*pattern);
                }
            }
        }
        selected
    }
}
