use crate::core::{LanguageModel, QueryMethod};
use crate::utils::error::{PatternError, Result};

fn missing(model: &str, method: QueryMethod) -> PatternError {
    PatternError::MissingCapability {
        model: model.to_string(),
        method: method.to_string(),
    }
}

/// Inert stand-in for an OpenAI chat model. Exposes `query`.
#[derive(Debug, Clone)]
pub struct OpenAiModel {
    pub openai_model_name: String,
}

impl OpenAiModel {
    pub fn new(openai_model_name: impl Into<String>) -> Self {
        Self {
            openai_model_name: openai_model_name.into(),
        }
    }

    pub fn query(&self, prompt: &str) -> String {
        format!("OpenAI response to: {}", prompt)
    }
}

impl LanguageModel for OpenAiModel {
    fn model_name(&self) -> &str {
        &self.openai_model_name
    }

    fn supports(&self, method: QueryMethod) -> bool {
        method == QueryMethod::Query
    }

    fn invoke(&self, method: QueryMethod, prompt: &str) -> Result<String> {
        match method {
            QueryMethod::Query => Ok(self.query(prompt)),
            other => Err(missing(&self.openai_model_name, other)),
        }
    }
}

/// Inert stand-in for a locally hosted HuggingFace model. Exposes `generate`.
#[derive(Debug, Clone)]
pub struct HuggingFaceModel {
    pub model_name: String,
    pub quantization_method: String,
}

impl HuggingFaceModel {
    pub fn new(model_name: impl Into<String>, quantization_method: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            quantization_method: quantization_method.into(),
        }
    }

    pub fn generate(&self, prompt: &str) -> String {
        format!("HuggingFace response to: {}", prompt)
    }
}

impl LanguageModel for HuggingFaceModel {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn supports(&self, method: QueryMethod) -> bool {
        method == QueryMethod::Generate
    }

    fn invoke(&self, method: QueryMethod, prompt: &str) -> Result<String> {
        match method {
            QueryMethod::Generate => Ok(self.generate(prompt)),
            other => Err(missing(&self.model_name, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_model_only_supports_query() {
        let model = OpenAiModel::new("gpt-4o");
        assert!(model.supports(QueryMethod::Query));
        assert!(!model.supports(QueryMethod::Generate));
        assert_eq!(
            model.invoke(QueryMethod::Query, "hi").unwrap(),
            "OpenAI response to: hi"
        );
        assert!(matches!(
            model.invoke(QueryMethod::Generate, "hi"),
            Err(PatternError::MissingCapability { .. })
        ));
    }

    #[test]
    fn test_huggingface_model_only_supports_generate() {
        let model = HuggingFaceModel::new("Mistral7b", "bitsandbytes");
        assert_eq!(model.quantization_method, "bitsandbytes");
        assert!(model.supports(QueryMethod::Generate));
        assert!(!model.supports(QueryMethod::Query));
        assert_eq!(
            model.invoke(QueryMethod::Generate, "hi").unwrap(),
            "HuggingFace response to: hi"
        );
        match model.invoke(QueryMethod::Query, "hi") {
            Err(PatternError::MissingCapability { model, method }) => {
                assert_eq!(model, "Mistral7b");
                assert_eq!(method, "query");
            }
            other => panic!("expected MissingCapability, got {:?}", other),
        }
    }
}
