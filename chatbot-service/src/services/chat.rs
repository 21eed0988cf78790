//! Question answering: prompt construction and the provider round-trip.

use super::providers::{GenerativeProvider, ProviderError};
use std::sync::Arc;

/// Reply used when the request carries no question.
pub const EMPTY_QUESTION_REPLY: &str = "Please ask me something!";

const QUESTION_PLACEHOLDER: &str = "{question}";

/// Persona and instructions wrapped around every question.
pub const PROMPT_TEMPLATE: &str = concat!(
    "\n",
    "You are a friendly, intelligent AI assistant named Mr.A. You provide detailed, \n",
    "comprehensive answers (4-7 lines minimum) to any question. You can:\n",
    "- Explain concepts thoroughly with examples\n",
    "- Extract and analyze data from text\n",
    "- Provide step-by-step guidance\n",
    "- Engage in meaningful conversations\n",
    "\n",
    "Question: {question}\n",
    "\n",
    "Provide a detailed answer:\n",
);

/// Substitute `question` into [`PROMPT_TEMPLATE`].
///
/// The question is inserted once and never re-scanned, so braces inside it
/// are passed through untouched.
pub fn build_prompt(question: &str) -> String {
    PROMPT_TEMPLATE.replacen(QUESTION_PLACEHOLDER, question, 1)
}

/// Outcome of asking the provider a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Text generated by the model.
    Reply(String),
    /// The provider call failed; carries the provider's error message.
    Failed(String),
}

impl Answer {
    /// Text shown to the user.
    pub fn into_text(self) -> String {
        match self {
            Answer::Reply(text) => text,
            Answer::Failed(message) => format!(
                "I encountered an error: {}. Please check your API key and try again!",
                message
            ),
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Answer::Reply(_) => "answered",
            Answer::Failed(_) => "failed",
        }
    }
}

impl From<Result<String, ProviderError>> for Answer {
    fn from(result: Result<String, ProviderError>) -> Self {
        match result {
            Ok(text) => Answer::Reply(text),
            Err(e) => Answer::Failed(e.to_string()),
        }
    }
}

/// Answers questions through a shared provider.
#[derive(Clone)]
pub struct ChatService {
    provider: Arc<dyn GenerativeProvider>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Ask the provider one question. Never fails; provider errors become
    /// [`Answer::Failed`].
    #[tracing::instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn answer(&self, question: &str) -> Answer {
        let prompt = build_prompt(question);
        let answer = Answer::from(self.provider.generate(&prompt).await);

        if let Answer::Failed(message) = &answer {
            tracing::warn!(error = %message, "Provider call failed");
        }

        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockProvider;

    #[test]
    fn prompt_contains_question_and_instructions() {
        let prompt = build_prompt("What is the capital of France?");
        assert!(prompt.starts_with("\nYou are a friendly, intelligent AI assistant named Mr.A."));
        assert!(prompt.contains("\nQuestion: What is the capital of France?\n"));
        assert!(prompt.ends_with("Provide a detailed answer:\n"));
        assert!(!prompt.contains(QUESTION_PLACEHOLDER));
    }

    #[test]
    fn braces_in_question_are_literal() {
        let prompt = build_prompt("what does {question} mean?");
        assert!(prompt.contains("Question: what does {question} mean?"));
    }

    #[test]
    fn failed_answer_wraps_message() {
        assert_eq!(
            Answer::Failed("timeout".to_string()).into_text(),
            "I encountered an error: timeout. Please check your API key and try again!"
        );
    }

    #[tokio::test]
    async fn answer_passes_prompt_to_provider() {
        let provider = Arc::new(MockProvider::replying("Paris is the capital of France."));
        let service = ChatService::new(provider.clone());

        let answer = service.answer("Capital of France?").await;

        assert_eq!(answer, Answer::Reply("Paris is the capital of France.".to_string()));
        assert_eq!(provider.generate_calls(), 1);
        assert_eq!(provider.last_prompt(), Some(build_prompt("Capital of France?")));
    }

    #[tokio::test]
    async fn provider_error_becomes_failed_answer() {
        let provider = Arc::new(MockProvider::failing(ProviderError::Timeout));
        let service = ChatService::new(provider);

        let answer = service.answer("hello").await;

        assert_eq!(answer, Answer::Failed("timeout".to_string()));
        assert_eq!(answer.outcome(), "failed");
    }
}
