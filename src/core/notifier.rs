use crate::core::Observer;
use crate::utils::error::{PatternError, Result};
use std::rc::Rc;

/// Broadcasts generated output to registered observers in registration order.
///
/// Observers are compared by pointer, so the same `Rc` may be registered more than once and
/// removal drops only the first registration. If an observer fails, the broadcast stops there
/// and the error is returned; observers after it do not see that output.
#[derive(Default)]
pub struct OutputNotifier {
    observers: Vec<Rc<dyn Observer>>,
}

impl OutputNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        tracing::debug!("Adding observer '{}'", observer.name());
        self.observers.push(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> Result<()> {
        let position = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
            .ok_or_else(|| PatternError::ObserverNotFound {
                observer: observer.name().to_string(),
            })?;
        self.observers.remove(position);
        tracing::debug!("Removed observer '{}'", observer.name());
        Ok(())
    }

    pub fn notify(&self, llm_output: &str) -> Result<()> {
        tracing::debug!("Notifying {} observer(s)", self.observers.len());
        for observer in &self.observers {
            observer.update(llm_output)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
