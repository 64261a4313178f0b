//! Static descriptions for the sixteen dog personality types

use crate::quiz::code::TypeCode;
use serde::{Deserialize, Serialize};

/// Code whose profile is shown when a code has no entry
pub const DEFAULT_CODE: &str = "ENFP";

/// Description of one personality type (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub code: TypeCode,
    pub description: String,
    pub traits: Vec<String>,
    pub compatibility: Vec<String>,
}

struct Entry {
    code: &'static str,
    description: &'static str,
    traits: [&'static str; 5],
    compatibility: [&'static str; 3],
}

const ENTRIES: [Entry; 16] = [
    Entry {
        code: "ENFP",
        description: "Outgoing, intuitive, feeling, perceiving - the enthusiastic explorer",
        traits: ["Lively", "Very curious", "Easily excited", "Loves company", "Inventive"],
        compatibility: [
            "Suits an active household",
            "Loves outdoor activities",
            "Needs plenty of attention and play",
        ],
    },
    Entry {
        code: "ISTJ",
        description: "Inward, sensing, thinking, judging - the dependable guardian",
        traits: ["Steady", "Regular habits", "Loyal protector", "Cautious", "Responsible"],
        compatibility: [
            "Suits a quiet household",
            "Likes a predictable routine",
            "Makes an excellent watchdog",
        ],
    },
    Entry {
        code: "ESFP",
        description: "Outgoing, sensing, feeling, perceiving - the happy performer",
        traits: ["Playful", "Lives in the moment", "Friendly", "Adaptable", "Loves attention"],
        compatibility: [
            "Suits a lively household",
            "Loves interacting with people",
            "Settles into new places easily",
        ],
    },
    Entry {
        code: "INTJ",
        description: "Inward, intuitive, thinking, judging - the independent strategist",
        traits: [
            "Thinks independently",
            "Strong-willed",
            "Calm and analytical",
            "Goal-driven",
            "Good problem solver",
        ],
        compatibility: [
            "Needs some time alone",
            "Enjoys puzzle games",
            "Stays wary of strangers",
        ],
    },
    Entry {
        code: "ENFJ",
        description: "Outgoing, intuitive, feeling, judging - the warm teacher",
        traits: ["Warm and friendly", "Reads people well", "Eager to help", "A natural leader", "Empathetic"],
        compatibility: [
            "Suits a family with children",
            "Loves joining family activities",
            "Needs emotional connection",
        ],
    },
    Entry {
        code: "ISTP",
        description: "Inward, sensing, thinking, perceiving - the cool-headed craftsman",
        traits: ["Calm and rational", "Handy with tasks", "Self-reliant", "Good problem solver", "Loves to explore"],
        compatibility: [
            "Suits an experienced owner",
            "Needs mental stimulation",
            "Likes finishing tasks alone",
        ],
    },
    Entry {
        code: "ESFJ",
        description: "Outgoing, sensing, feeling, judging - the caring helper",
        traits: ["Warm-hearted", "Looks after others", "Follows the rules", "Loyal", "Cooperative"],
        compatibility: [
            "Suits a family home",
            "Likes a predictable routine",
            "Needs to feel needed",
        ],
    },
    Entry {
        code: "INTP",
        description: "Inward, intuitive, thinking, perceiving - the curious thinker",
        traits: ["Analytical", "Very curious", "Thinks independently", "Good problem solver", "Loves to explore"],
        compatibility: [
            "Needs mental stimulation",
            "Enjoys solo activities",
            "Drawn to anything new",
        ],
    },
    Entry {
        code: "ENTP",
        description: "Outgoing, intuitive, thinking, perceiving - the quick-witted debater",
        traits: ["Quick-witted", "Very curious", "Argues its case", "Inventive", "Loves a challenge"],
        compatibility: [
            "Needs lots of stimulation",
            "Enjoys learning new skills",
            "Gets bored easily",
        ],
    },
    Entry {
        code: "ISFJ",
        description: "Inward, sensing, feeling, judging - the gentle protector",
        traits: ["Gentle", "Attentive", "Loyal", "Responsible", "Looks after others"],
        compatibility: [
            "Suits a quiet household",
            "Likes a stable environment",
            "Makes an excellent companion dog",
        ],
    },
    Entry {
        code: "ESTP",
        description: "Outgoing, sensing, thinking, perceiving - the bold doer",
        traits: ["Bold and practical", "Action-oriented", "Adaptable", "Good problem solver", "Loves adventure"],
        compatibility: [
            "Suits an active owner",
            "Loves outdoor activities",
            "Needs lots of exercise",
        ],
    },
    Entry {
        code: "INFJ",
        description: "Inward, intuitive, feeling, judging - the insightful idealist",
        traits: ["Insightful", "Idealistic", "Reads people well", "Creative", "Driven by purpose"],
        compatibility: [
            "Needs a deep bond",
            "Likes a calm environment",
            "Deeply loyal to its owner",
        ],
    },
    Entry {
        code: "ENTJ",
        description: "Outgoing, intuitive, thinking, judging - the decisive commander",
        traits: ["Decisive", "A natural leader", "Goal-driven", "Good planner", "Determined"],
        compatibility: [
            "Needs clear rules",
            "Likes taking responsibility",
            "Suits an experienced owner",
        ],
    },
    Entry {
        code: "ISFP",
        description: "Inward, sensing, feeling, perceiving - the gentle artist",
        traits: ["Gentle and sensitive", "Appreciates comfort", "Mild-mannered", "Adaptable", "Lives in the moment"],
        compatibility: [
            "Suits a gentle environment",
            "Needs emotional support",
            "Loves a comfortable life",
        ],
    },
    Entry {
        code: "ESTJ",
        description: "Outgoing, sensing, thinking, judging - the efficient organiser",
        traits: ["Practical and efficient", "Well organised", "Follows the rules", "Responsible", "Good at managing"],
        compatibility: [
            "Suits a structured life",
            "Needs clear rules",
            "Loves completing tasks",
        ],
    },
    Entry {
        code: "INFP",
        description: "Inward, intuitive, feeling, perceiving - the idealistic peacemaker",
        traits: ["Idealistic", "Empathetic", "Reads people well", "Creative", "Seeks harmony"],
        compatibility: [
            "Needs emotional connection",
            "Likes a calm environment",
            "Deeply loyal to its owner",
        ],
    },
];

impl Entry {
    fn to_profile(&self) -> Option<TypeProfile> {
        Some(TypeProfile {
            code: self.code.parse().ok()?,
            description: self.description.to_string(),
            traits: self.traits.iter().map(|s| s.to_string()).collect(),
            compatibility: self.compatibility.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Read-only lookup over the built-in profile table
pub struct TypeCatalog;

impl TypeCatalog {
    /// Profile for a code, if the table has one
    pub fn get(code: &TypeCode) -> Option<TypeProfile> {
        let key = code.to_string();
        ENTRIES
            .iter()
            .find(|entry| entry.code == key)
            .and_then(Entry::to_profile)
    }

    /// Profile for a code, falling back to the [`DEFAULT_CODE`] entry
    pub fn get_or_default(code: &TypeCode) -> TypeProfile {
        Self::get(code).unwrap_or_else(Self::default_profile)
    }

    /// The profile shown when a code has no entry
    pub fn default_profile() -> TypeProfile {
        ENTRIES
            .iter()
            .find(|entry| entry.code == DEFAULT_CODE)
            .and_then(Entry::to_profile)
            .unwrap_or_else(|| TypeProfile {
                code: TypeCode::all()[0],
                description: String::new(),
                traits: Vec::new(),
                compatibility: Vec::new(),
            })
    }

    /// Every profile in table order
    pub fn all() -> Vec<TypeProfile> {
        ENTRIES.iter().filter_map(Entry::to_profile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_a_profile() {
        for code in TypeCode::all() {
            let profile = TypeCatalog::get(&code).unwrap();
            assert_eq!(profile.code, code);
            assert_eq!(profile.traits.len(), 5);
            assert_eq!(profile.compatibility.len(), 3);
        }
    }

    #[test]
    fn test_table_entries_parse() {
        assert_eq!(TypeCatalog::all().len(), 16);
    }

    #[test]
    fn test_default_profile_is_enfp() {
        let profile = TypeCatalog::default_profile();
        assert_eq!(profile.code.to_string(), DEFAULT_CODE);
        assert!(profile.description.contains("explorer"));
    }

    #[test]
    fn test_get_or_default_returns_exact_entry() {
        let code: TypeCode = "ISTJ".parse().unwrap();
        assert_eq!(TypeCatalog::get_or_default(&code).code, code);
    }
}
