use crate::core::RagStrategy;

/// Answers queries from documents retrieved by whichever strategy is currently set.
pub struct ChatBot {
    strategy: Box<dyn RagStrategy>,
}

impl ChatBot {
    pub fn new(strategy: Box<dyn RagStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn RagStrategy>) {
        tracing::debug!(
            "Switching retrieval strategy from '{}' to '{}'",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn get_response(&self, query: &str) -> String {
        let retrieved_docs = self.strategy.retrieve(query);
        tracing::debug!(
            "Strategy '{}' retrieved {} document(s)",
            self.strategy.name(),
            retrieved_docs.len()
        );
        format!("Generated response based on: {:?}", retrieved_docs)
    }
}
