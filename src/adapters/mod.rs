// Adapters layer: stand-ins for external model providers. None of them call a real service.

pub mod models;

pub use models::{HuggingFaceModel, OpenAiModel};

use crate::config::toml_config::{ModelConfig, PROVIDER_HUGGINGFACE, PROVIDER_OPENAI};
use crate::core::model_adapter::ModelAdapter;
use crate::core::TextQuery;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::validate_required_field;

/// Builds the configured model and adapts it through its configured method.
pub fn instantiate(config: &ModelConfig) -> Result<Box<dyn TextQuery>> {
    match config.provider.as_str() {
        PROVIDER_OPENAI => {
            let model = OpenAiModel::new(config.model_name.as_str());
            Ok(Box::new(ModelAdapter::with_method_name(model, &config.method)?))
        }
        PROVIDER_HUGGINGFACE => {
            let quantization = validate_required_field(
                "adapter.models.quantization_method",
                &config.quantization_method,
            )?;
            let model = HuggingFaceModel::new(config.model_name.as_str(), quantization.as_str());
            Ok(Box::new(ModelAdapter::with_method_name(model, &config.method)?))
        }
        other => Err(PatternError::InvalidConfigValueError {
            field: "adapter.models.provider".to_string(),
            value: other.to_string(),
            reason: format!(
                "Unsupported provider. Valid providers: {}, {}",
                PROVIDER_OPENAI, PROVIDER_HUGGINGFACE
            ),
        }),
    }
}
