pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HuggingFaceModel, OpenAiModel};
pub use app::demos::Pattern;
pub use app::engine::DemoEngine;
pub use config::toml_config::DemoConfig;
pub use core::{
    chatbot::ChatBot, model_adapter::ModelAdapter, notifier::OutputNotifier,
    query_builder::QueryBuilder,
};
pub use utils::error::{PatternError, Result};
