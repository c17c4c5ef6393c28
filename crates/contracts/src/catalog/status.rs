use serde::{Deserialize, Serialize};

/// Tri-state vegan classification shown as a colored badge on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VeganStatus {
    Vegan,
    NonVegan,
    Unknown,
}

impl VeganStatus {
    /// Parse a raw status value as the API sends it.
    ///
    /// The vocabulary varies between data sources ("Vegan", "non-vegan",
    /// "yes", "true", ...), so the value is normalized first: trimmed,
    /// lowercased, whitespace and hyphens folded to underscores. Anything
    /// unrecognized, including a missing value, is `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = match raw {
            Some(s) => normalize(s),
            None => return VeganStatus::Unknown,
        };

        match normalized.as_str() {
            "vegan" | "yes" | "true" => VeganStatus::Vegan,
            "non_vegan" | "not_vegan" | "no" | "false" => VeganStatus::NonVegan,
            _ => VeganStatus::Unknown,
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            VeganStatus::Vegan => "Vegan",
            VeganStatus::NonVegan => "Not Vegan",
            VeganStatus::Unknown => "Unknown",
        }
    }

    /// Stable CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            VeganStatus::Vegan => "vegan",
            VeganStatus::NonVegan => "non_vegan",
            VeganStatus::Unknown => "unknown",
        }
    }

    /// Literal the server-side `status` filter expects, if any.
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            VeganStatus::Vegan => Some("vegan"),
            VeganStatus::NonVegan => Some("non_vegan"),
            VeganStatus::Unknown => None,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_and_case_variants_agree() {
        assert_eq!(VeganStatus::parse(Some("non-vegan")), VeganStatus::NonVegan);
        assert_eq!(VeganStatus::parse(Some("NON_VEGAN")), VeganStatus::NonVegan);
        assert_eq!(VeganStatus::parse(Some("Non Vegan")), VeganStatus::NonVegan);
        assert_eq!(VeganStatus::parse(Some("not vegan")), VeganStatus::NonVegan);
        assert_eq!(VeganStatus::parse(Some("Vegan")), VeganStatus::Vegan);
        assert_eq!(VeganStatus::parse(Some("  vegan  ")), VeganStatus::Vegan);
    }

    #[test]
    fn test_boolean_vocabularies() {
        assert_eq!(VeganStatus::parse(Some("yes")), VeganStatus::Vegan);
        assert_eq!(VeganStatus::parse(Some("TRUE")), VeganStatus::Vegan);
        assert_eq!(VeganStatus::parse(Some("no")), VeganStatus::NonVegan);
        assert_eq!(VeganStatus::parse(Some("False")), VeganStatus::NonVegan);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(VeganStatus::parse(None), VeganStatus::Unknown);
        assert_eq!(VeganStatus::parse(Some("")), VeganStatus::Unknown);
        assert_eq!(VeganStatus::parse(Some("   ")), VeganStatus::Unknown);
        assert_eq!(VeganStatus::parse(Some("maybe")), VeganStatus::Unknown);
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(VeganStatus::Vegan.label(), "Vegan");
        assert_eq!(VeganStatus::NonVegan.label(), "Not Vegan");
        assert_eq!(VeganStatus::Unknown.label(), "Unknown");
        assert_eq!(VeganStatus::Vegan.css_class(), "vegan");
        assert_eq!(VeganStatus::NonVegan.css_class(), "non_vegan");
        assert_eq!(VeganStatus::Unknown.css_class(), "unknown");
    }

    #[test]
    fn test_query_values() {
        assert_eq!(VeganStatus::Vegan.as_query_value(), Some("vegan"));
        assert_eq!(VeganStatus::NonVegan.as_query_value(), Some("non_vegan"));
        assert_eq!(VeganStatus::Unknown.as_query_value(), None);
    }
}
