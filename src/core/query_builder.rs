use crate::core::{Example, Query};

pub const DEFAULT_TEMPERATURE: f64 = 1.0;
pub const DEFAULT_MAX_TOKENS: i64 = 100;

/// Fluent accumulator for [`Query`]. Setters consume and return the builder; `build` only
/// borrows it, so the builder can keep changing after a query is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    prompt: String,
    temperature: f64,
    max_tokens: i64,
    examples: Vec<Example>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            examples: Vec::new(),
        }
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(Example {
            input: input.into(),
            output: output.into(),
        });
        self
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn build(&self) -> Query {
        let prompt = if self.examples.is_empty() {
            self.prompt.clone()
        } else {
            let shots = self
                .examples
                .iter()
                .map(|ex| format!("Input: {}\nOutput: {}", ex.input, ex.output))
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("{}\n\nInput: {}\nOutput:", shots, self.prompt)
        };

        tracing::debug!(
            "Built query with {} example(s), temperature {}, max_tokens {}",
            self.examples.len(),
            self.temperature,
            self.max_tokens
        );

        Query {
            prompt,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}
