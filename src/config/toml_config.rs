use crate::core::query_builder::QueryBuilder;
use crate::core::Example;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PROVIDER_OPENAI: &str = "openai";
pub const PROVIDER_HUGGINGFACE: &str = "huggingface";

/// Sample inputs for the demos. Every section is optional and falls back to the built-in
/// samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub adapter: AdapterConfig,
    pub builder: BuilderConfig,
    pub observer: ObserverConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub prompt: String,
    pub models: Vec<ModelConfig>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            prompt: "What is Python?".to_string(),
            models: vec![
                ModelConfig {
                    provider: PROVIDER_OPENAI.to_string(),
                    model_name: "gpt-4o".to_string(),
                    quantization_method: None,
                    method: "query".to_string(),
                },
                ModelConfig {
                    provider: PROVIDER_HUGGINGFACE.to_string(),
                    model_name: "Mistral7b".to_string(),
                    quantization_method: Some("bitsandbytes".to_string()),
                    method: "generate".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: String,
    pub model_name: String,
    pub quantization_method: Option<String>,
    /// Name of the operation the adapter forwards to.
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub few_shot: QueryPreset,
    pub no_shot: QueryPreset,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            few_shot: QueryPreset {
                prompt: "What is C++?".to_string(),
                temperature: Some(0.7),
                max_tokens: Some(50),
                examples: vec![
                    Example {
                        input: "What is Python?".to_string(),
                        output: "Python is a programming language.".to_string(),
                    },
                    Example {
                        input: "What is Java?".to_string(),
                        output: "Java is a programming language.".to_string(),
                    },
                ],
            },
            no_shot: QueryPreset {
                prompt: "What is the capital of France?".to_string(),
                temperature: None,
                max_tokens: Some(20),
                examples: Vec::new(),
            },
        }
    }
}

/// Builder inputs. Unset numbers keep the builder defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPreset {
    pub prompt: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i64>,
    pub examples: Vec<Example>,
}

impl QueryPreset {
    pub fn to_builder(&self) -> QueryBuilder {
        let mut builder = self
            .examples
            .iter()
            .fold(QueryBuilder::new(), |builder, ex| {
                builder.example(ex.input.as_str(), ex.output.as_str())
            })
            .prompt(self.prompt.as_str());
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        builder
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// The first output goes to every observer; the logger is then detached and the rest go
    /// to the UI only.
    pub outputs: Vec<String>,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            outputs: vec![
                "The capital of France is Paris.".to_string(),
                "Python is a programming language known for its simplicity.".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub query: String,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            query: "Explain Python design patterns.".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PatternError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PatternError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PatternError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("adapter.prompt", &self.adapter.prompt)?;

        // Method names are not checked here: an unsupported one is reported by the adapter.
        for model in &self.adapter.models {
            validate_one_of(
                "adapter.models.provider",
                &model.provider,
                &[PROVIDER_OPENAI, PROVIDER_HUGGINGFACE],
            )?;
            validate_non_empty_string("adapter.models.model_name", &model.model_name)?;
            if model.provider == PROVIDER_HUGGINGFACE {
                validate_required_field(
                    "adapter.models.quantization_method",
                    &model.quantization_method,
                )?;
            }
        }

        validate_non_empty_string("strategy.query", &self.strategy.query)?;
        Ok(())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_samples() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.adapter.models.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml_content = r#"
[strategy]
query = "What is RAG?"

[builder.no_shot]
prompt = "Name a prime."
"#;
        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.strategy.query, "What is RAG?");
        assert_eq!(config.builder.no_shot.prompt, "Name a prime.");
        assert_eq!(config.builder.no_shot.max_tokens, None);
        assert_eq!(config.builder.few_shot, BuilderConfig::default().few_shot);
        assert_eq!(config.adapter, AdapterConfig::default());
    }

    #[test]
    fn test_parse_models() {
        let toml_content = r#"
[adapter]
prompt = "Hello?"

[[adapter.models]]
provider = "huggingface"
model_name = "Llama3"
quantization_method = "gptq"
method = "generate"
"#;
        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.adapter.models.len(), 1);
        assert_eq!(config.adapter.models[0].model_name, "Llama3");
        assert_eq!(
            config.adapter.models[0].quantization_method.as_deref(),
            Some("gptq")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LLM_PATTERNS_TEST_MODEL", "gpt-4o-mini");

        let toml_content = r#"
[[adapter.models]]
provider = "openai"
model_name = "${LLM_PATTERNS_TEST_MODEL}"
method = "query"

[strategy]
query = "${LLM_PATTERNS_UNSET_VARIABLE}"
"#;
        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.adapter.models[0].model_name, "gpt-4o-mini");
        assert_eq!(config.strategy.query, "${LLM_PATTERNS_UNSET_VARIABLE}");

        std::env::remove_var("LLM_PATTERNS_TEST_MODEL");
    }

    #[test]
    fn test_config_validation() {
        let unknown_provider = r#"
[[adapter.models]]
provider = "anthropic"
model_name = "x"
method = "query"
"#;
        let config = DemoConfig::from_toml_str(unknown_provider).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PatternError::InvalidConfigValueError { .. })
        ));

        let missing_quantization = r#"
[[adapter.models]]
provider = "huggingface"
model_name = "Mistral7b"
method = "generate"
"#;
        let config = DemoConfig::from_toml_str(missing_quantization).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PatternError::MissingConfigError { .. })
        ));

        let unsupported_method = r#"
[[adapter.models]]
provider = "openai"
model_name = "gpt-4o"
method = "generate"
"#;
        let config = DemoConfig::from_toml_str(unsupported_method).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = DemoConfig::from_toml_str("[adapter\nprompt = 1");
        assert!(matches!(
            result,
            Err(PatternError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[observer]\noutputs = [\"only one\"]\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.observer.outputs, vec!["only one"]);
    }

    #[test]
    fn test_query_preset_to_builder() {
        let query = BuilderConfig::default().few_shot.to_builder().build();
        assert_eq!(query.temperature, 0.7);
        assert_eq!(query.max_tokens, 50);
        assert!(query.prompt.ends_with("Input: What is C++?\nOutput:"));
    }
}
