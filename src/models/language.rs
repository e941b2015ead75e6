use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// UI languages offered by the language selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hindi,
    Spanish,
    French,
    German,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
    ];

    /// Identifier used in requests and in the translation table
    pub fn identifier(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hindi => "hindi",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Japanese => "japanese",
        }
    }

    /// Name shown in the selector
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.identifier() == s)
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_from_str_round_trips_identifiers() {
        for lang in Language::ALL {
            assert_eq!(lang.identifier().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("klingon".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_identifier() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hindi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
