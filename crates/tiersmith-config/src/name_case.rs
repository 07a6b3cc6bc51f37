#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Naming-case policy for identifiers taken from the schema.
///
/// `Preserve` passes raw table/column names through unchanged; `Pascal`
/// rewrites them to PascalCase before they land in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    Preserve,
    Pascal,
}

impl Default for NameCase {
    fn default() -> Self {
        NameCase::Pascal
    }
}

impl NameCase {
    /// Returns true when raw names are kept as-is.
    pub fn is_preserve(self) -> bool {
        matches!(self, NameCase::Preserve)
    }

    /// Returns true when raw names are rewritten to PascalCase.
    pub fn is_pascal(self) -> bool {
        matches!(self, NameCase::Pascal)
    }
}

#[cfg(test)]
mod tests {
    use super::NameCase;

    #[test]
    fn default_is_pascal() {
        assert!(NameCase::default().is_pascal());
        assert!(!NameCase::default().is_preserve());
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&NameCase::Preserve).unwrap();
        assert_eq!(json, "\"preserve\"");
        let back: NameCase = serde_json::from_str("\"pascal\"").unwrap();
        assert!(back.is_pascal());
    }
}
