use crate::domain::model::QueryMethod;
use crate::utils::error::Result;

/// A model handle advertising which query operations it exposes.
pub trait LanguageModel {
    fn model_name(&self) -> &str;
    fn supports(&self, method: QueryMethod) -> bool;
    /// Returns `MissingCapability` when `method` is not exposed.
    fn invoke(&self, method: QueryMethod, prompt: &str) -> Result<String>;
}

/// The single calling convention every adapted model shares.
pub trait TextQuery {
    fn query(&self, text: &str) -> Result<String>;
}

pub trait Observer {
    fn name(&self) -> &str;
    fn update(&self, llm_output: &str) -> Result<()>;
}

pub trait RagStrategy {
    fn name(&self) -> &str;
    fn retrieve(&self, query: &str) -> Vec<String>;
}
