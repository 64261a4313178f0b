//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat-completion models known to produce usable letter summaries (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41Mini,
    Gpt41,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Custom(s) => s,
        }
    }

    /// Resolve a model identifier, keeping unknown names as [`Model::Custom`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gpt4oMini, Model::Gpt4o, Model::Gpt41Mini, Model::Gpt41] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "local-llama-3".parse().unwrap();
        assert_eq!(model, Model::Custom("local-llama-3".to_string()));
        assert_eq!(model.to_string(), "local-llama-3");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt4oMini);
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gpt4o).unwrap();
        assert_eq!(json, "\"gpt-4o\"");
        let model: Model = serde_json::from_str("\"gpt-4.1\"").unwrap();
        assert_eq!(model, Model::Gpt41);
    }
}
