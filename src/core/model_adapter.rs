use crate::core::{LanguageModel, QueryMethod, TextQuery};
use crate::utils::error::{PatternError, Result};

/// Puts a model behind the uniform [`TextQuery`] interface by forwarding to one of its
/// operations.
#[derive(Debug, Clone)]
pub struct ModelAdapter<M: LanguageModel> {
    model: M,
    method: QueryMethod,
}

impl<M: LanguageModel> ModelAdapter<M> {
    /// Fails with `MissingCapability` if `model` does not expose `method`.
    pub fn new(model: M, method: QueryMethod) -> Result<Self> {
        if !model.supports(method) {
            return Err(PatternError::MissingCapability {
                model: model.model_name().to_string(),
                method: method.to_string(),
            });
        }
        tracing::debug!("Adapting model '{}' via '{}'", model.model_name(), method);
        Ok(Self { model, method })
    }

    /// Same as [`ModelAdapter::new`] with the operation given by name. Unknown names are
    /// missing capabilities too.
    pub fn with_method_name(model: M, method_name: &str) -> Result<Self> {
        let method = method_name
            .parse::<QueryMethod>()
            .map_err(|name| PatternError::MissingCapability {
                model: model.model_name().to_string(),
                method: name,
            })?;
        Self::new(model, method)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn method(&self) -> QueryMethod {
        self.method
    }
}

impl<M: LanguageModel> TextQuery for ModelAdapter<M> {
    fn query(&self, text: &str) -> Result<String> {
        self.model.invoke(self.method, text)
    }
}
