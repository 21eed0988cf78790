//! Mock provider implementation for testing.

use super::{GenerativeProvider, ProviderError};
use crate::models::ModelDescriptor;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock provider returning canned results and counting calls.
pub struct MockProvider {
    reply: Result<String, ProviderError>,
    models: Result<Vec<ModelDescriptor>, ProviderError>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    /// Provider whose `generate` always returns `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    /// Provider whose `generate` always fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_reply(Err(error))
    }

    /// Provider whose `list_models` returns `models`.
    pub fn with_models(models: Vec<ModelDescriptor>) -> Self {
        Self {
            models: Ok(models),
            ..Self::replying("Mock response")
        }
    }

    /// Provider whose `list_models` fails with `error`.
    pub fn failing_listing(error: ProviderError) -> Self {
        Self {
            models: Err(error),
            ..Self::replying("Mock response")
        }
    }

    fn with_reply(reply: Result<String, ProviderError>) -> Self {
        Self {
            reply,
            models: Ok(Vec::new()),
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Prompt passed to the most recent `generate` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }
        self.reply.clone()
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.models.clone()
    }
}
