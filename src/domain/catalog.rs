//! Response categories and the canned-response catalog.
//!
//! The catalog is a fixed mapping built once at startup (built-in strings or
//! a JSON override file) and immutable for the process lifetime.

use crate::domain::{DomainError, Utterance};
use serde::{Deserialize, Serialize};

/// Placeholder interpolated with the current wall-clock value at resolution
/// time. Only the time response uses it.
pub const TIME_PLACEHOLDER: &str = "{time}";

/// Named bucket of canned responses, selected by keyword containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Capabilities,
    Joke,
    Weather,
    Time,
    Default,
}

/// Trigger substrings per category, in fixed priority order. First matching
/// category wins; ties resolve by this order, not by match length.
const RULES: &[(Category, &[&str])] = &[
    (Category::Greeting, &["hello", "hi", "hey"]),
    (Category::Capabilities, &["what can you do"]),
    (Category::Joke, &["joke"]),
    (Category::Weather, &["weather"]),
    (Category::Time, &["time"]),
];

impl Category {
    /// Classify an utterance by ordered containment checks. Every input,
    /// including the empty string, falls through to `Default` when no
    /// trigger matches.
    pub fn classify(utterance: &Utterance) -> Category {
        for (category, triggers) in RULES {
            if triggers.iter().any(|t| utterance.contains_trigger(t)) {
                return *category;
            }
        }
        Category::Default
    }
}

/// One catalog entry: a single fixed string or an ordered candidate list the
/// resolver picks from uniformly at random.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CannedResponse {
    Single(String),
    Choice(Vec<String>),
}

impl CannedResponse {
    /// All candidate strings for this entry.
    pub fn candidates(&self) -> &[String] {
        match self {
            CannedResponse::Single(s) => std::slice::from_ref(s),
            CannedResponse::Choice(v) => v.as_slice(),
        }
    }
}

/// Fixed category -> responses mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseCatalog {
    pub greeting: CannedResponse,
    pub capabilities: CannedResponse,
    pub joke: CannedResponse,
    pub weather: CannedResponse,
    pub time: CannedResponse,
    pub default: CannedResponse,
}

impl ResponseCatalog {
    /// The built-in catalog shipped with the assistant.
    pub fn builtin() -> Self {
        Self {
            greeting: CannedResponse::Choice(vec![
                "Hello! How can I assist you today?".to_string(),
                "Hi there! What would you like to know?".to_string(),
                "Hey! Ready to help with anything you need!".to_string(),
            ]),
            capabilities: CannedResponse::Single(
                "I can greet you, tell a joke, talk about the weather, and tell you \
                 the current time. Ask away!"
                    .to_string(),
            ),
            joke: CannedResponse::Choice(vec![
                "Why do programmers prefer dark mode? Because light attracts bugs!".to_string(),
                "Why did the computer go to the doctor? Because it caught a virus!".to_string(),
            ]),
            weather: CannedResponse::Single(
                "I can't check live weather, but wherever you are, I hope it's a great day!"
                    .to_string(),
            ),
            time: CannedResponse::Single(format!("The current time is {}.", TIME_PLACEHOLDER)),
            default: CannedResponse::Single(
                "That's interesting! I'm designed to process information quickly. \
                 How can I help you specifically?"
                    .to_string(),
            ),
        }
    }

    /// Load a replacement catalog from a JSON file. The result is still
    /// immutable for the rest of the process lifetime.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        let catalog: Self = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Catalog(format!("parse {}: {}", path.display(), e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every entry must have at least one candidate.
    fn validate(&self) -> Result<(), DomainError> {
        for (name, entry) in [
            ("greeting", &self.greeting),
            ("capabilities", &self.capabilities),
            ("joke", &self.joke),
            ("weather", &self.weather),
            ("time", &self.time),
            ("default", &self.default),
        ] {
            if entry.candidates().is_empty() {
                return Err(DomainError::Catalog(format!("category '{}' is empty", name)));
            }
        }
        Ok(())
    }

    /// Entry for a category.
    pub fn entry(&self, category: Category) -> &CannedResponse {
        match category {
            Category::Greeting => &self.greeting,
            Category::Capabilities => &self.capabilities,
            Category::Joke => &self.joke,
            Category::Weather => &self.weather,
            Category::Time => &self.time,
            Category::Default => &self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Category {
        Category::classify(&Utterance::new(raw))
    }

    #[test]
    fn test_classify_greeting() {
        assert_eq!(classify("Hey there!"), Category::Greeting);
        assert_eq!(classify("HELLO"), Category::Greeting);
        assert_eq!(classify("well hi"), Category::Greeting);
    }

    #[test]
    fn test_classify_priority_order() {
        // "joke" is checked before "weather".
        assert_eq!(classify("tell me a joke about the weather"), Category::Joke);
        // greeting wins over anything later in the order.
        assert_eq!(classify("hi, what time is it"), Category::Greeting);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("banana"), Category::Default);
        assert_eq!(classify(""), Category::Default);
    }

    #[test]
    fn test_classify_capabilities() {
        assert_eq!(classify("So, what can you do?"), Category::Capabilities);
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = ResponseCatalog::builtin();
        assert_eq!(catalog.entry(Category::Greeting).candidates().len(), 3);
        assert_eq!(catalog.entry(Category::Joke).candidates().len(), 2);
        assert_eq!(catalog.entry(Category::Default).candidates().len(), 1);
        assert!(
            catalog.entry(Category::Time).candidates()[0].contains(TIME_PLACEHOLDER)
        );
    }

    #[test]
    fn test_catalog_json_roundtrip_untagged() {
        let json = serde_json::to_string(&ResponseCatalog::builtin()).unwrap();
        let parsed: ResponseCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entry(Category::Greeting).candidates().len(), 3);
    }

    #[test]
    fn test_catalog_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "greeting": ["yo"],
                "capabilities": "much",
                "joke": ["a", "b"],
                "weather": "cloudy",
                "time": "it is {{time}} now",
                "default": "hmm"
            }}"#
        )
        .unwrap();

        let catalog = ResponseCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.entry(Category::Greeting).candidates(), ["yo"]);
        assert_eq!(catalog.entry(Category::Joke).candidates().len(), 2);
    }

    #[test]
    fn test_catalog_rejects_empty_category() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "greeting": [],
                "capabilities": "x",
                "joke": "x",
                "weather": "x",
                "time": "x",
                "default": "x"
            }}"#
        )
        .unwrap();

        let err = ResponseCatalog::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("greeting"));
    }
}
