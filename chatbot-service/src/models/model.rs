use serde::Serialize;

/// Generation method a model must advertise to answer chat questions.
pub const GENERATE_CONTENT: &str = "generateContent";

/// A model visible to the configured API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Resource name, e.g. `models/gemini-2.0-flash-001`.
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub supported_generation_methods: Vec<String>,
}

impl ModelDescriptor {
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods.iter().any(|m| m == method)
    }

    pub fn supports_generation(&self) -> bool {
        self.supports(GENERATE_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(methods: &[&str]) -> ModelDescriptor {
        ModelDescriptor {
            name: "models/test".to_string(),
            display_name: "Test".to_string(),
            description: String::new(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_generation_capability() {
        assert!(model(&["generateContent", "countTokens"]).supports_generation());
        assert!(!model(&["embedContent"]).supports_generation());
        assert!(!model(&[]).supports_generation());
    }

    #[test]
    fn test_method_match_is_exact() {
        assert!(!model(&["streamGenerateContent"]).supports_generation());
    }
}
