pub mod chatbot;
pub mod model_adapter;
pub mod notifier;
pub mod query_builder;

pub use crate::domain::model::{DemoReport, Example, LogEntry, Query, QueryMethod, Transcript};
pub use crate::domain::ports::{LanguageModel, Observer, RagStrategy, TextQuery};
pub use crate::utils::error::Result;
