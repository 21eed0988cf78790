use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /chatbot`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// A non-string value (number, object, null) decodes as `None`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub question: Option<String>,
}

impl ChatRequest {
    /// The question, if one was actually asked.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_question_is_read() {
        assert_eq!(parse(r#"{"question":"What is Rust?"}"#).question(), Some("What is Rust?"));
    }

    #[test]
    fn test_missing_and_empty_question_are_none() {
        assert_eq!(parse("{}").question(), None);
        assert_eq!(parse(r#"{"question":""}"#).question(), None);
        assert_eq!(parse(r#"{"question":null}"#).question(), None);
    }

    #[test]
    fn test_non_string_question_is_none() {
        assert_eq!(parse(r#"{"question":42}"#).question(), None);
        assert_eq!(parse(r#"{"question":["a"]}"#).question(), None);
    }

    #[test]
    fn test_whitespace_question_is_kept() {
        assert_eq!(parse(r#"{"question":" "}"#).question(), Some(" "));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        assert_eq!(parse(r#"{"question":"hi","lang":"en"}"#).question(), Some("hi"));
    }

    #[test]
    fn test_response_serializes_single_key() {
        let json = serde_json::to_value(ChatResponse::new("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"response": "ok"}));
    }
}
