//! Category module - canonical labels and synonym normalization
//!
//! Category strings arrive from users and from the interpretation agent in
//! many spellings. Before any comparison they are trimmed, lower-cased and
//! folded through a fixed synonym table. Strings outside the table are kept
//! as they are (after trimming and lower-casing), so a canonical label given
//! directly still works and an unknown category simply matches nothing.

use std::fmt;

/// Synonym table: canonical label followed by every spelling that maps to it
const SYNONYMS: &[(&str, &[&str])] = &[
    ("clothing", &["clothing", "clothes", "apparel", "wearables"]),
    ("electronics", &["electronics", "devices", "tech"]),
    ("groceries", &["groceries", "grocery", "food"]),
    ("accessories", &["accessories", "bags", "backpacks"]),
];

/// A normalized category label
///
/// Construct with [`CategoryLabel::parse`], which always normalizes, so two
/// labels compare equal exactly when their normalized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    /// Normalize a raw category string into a label
    ///
    /// # Examples
    ///
    /// ```
    /// use finder_domain::CategoryLabel;
    ///
    /// assert_eq!(CategoryLabel::parse("  Apparel ").as_str(), "clothing");
    /// assert_eq!(CategoryLabel::parse("Tech").as_str(), "electronics");
    /// assert_eq!(CategoryLabel::parse("Furniture").as_str(), "furniture");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let folded = raw.trim().to_lowercase();
        for (canonical, spellings) in SYNONYMS {
            if spellings.contains(&folded.as_str()) {
                return Self((*canonical).to_string());
            }
        }
        Self(folded)
    }

    /// Get the label as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is one of the canonical categories
    pub fn is_canonical(&self) -> bool {
        SYNONYMS.iter().any(|(canonical, _)| *canonical == self.0)
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize an optional raw category
///
/// Absent input stays absent, meaning "no category filtering".
///
/// # Examples
///
/// ```
/// use finder_domain::normalize;
///
/// assert_eq!(normalize(None), None);
/// assert_eq!(normalize(Some("Clothes")).unwrap().as_str(), "clothing");
/// ```
pub fn normalize(raw: Option<&str>) -> Option<CategoryLabel> {
    raw.map(CategoryLabel::parse)
}

/// The closed set of canonical labels, in table order
pub fn canonical_labels() -> impl Iterator<Item = &'static str> {
    SYNONYMS.iter().map(|(canonical, _)| *canonical)
}

/// Spellings that normalize to the given canonical label
///
/// Returns an empty slice for labels outside the canonical set.
pub fn synonyms_of(label: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == label)
        .map(|(_, spellings)| *spellings)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_fold_to_canonical() {
        for word in ["clothing", "clothes", "apparel", "wearables"] {
            assert_eq!(CategoryLabel::parse(word).as_str(), "clothing");
        }
        for word in ["electronics", "devices", "tech"] {
            assert_eq!(CategoryLabel::parse(word).as_str(), "electronics");
        }
        for word in ["groceries", "grocery", "food"] {
            assert_eq!(CategoryLabel::parse(word).as_str(), "groceries");
        }
        for word in ["accessories", "bags", "backpacks"] {
            assert_eq!(CategoryLabel::parse(word).as_str(), "accessories");
        }
    }

    #[test]
    fn test_trim_and_case() {
        assert_eq!(CategoryLabel::parse("\tFOOD \n").as_str(), "groceries");
        assert_eq!(CategoryLabel::parse(" Devices").as_str(), "electronics");
    }

    #[test]
    fn test_unknown_passes_through() {
        let label = CategoryLabel::parse("  Garden Tools ");
        assert_eq!(label.as_str(), "garden tools");
        assert!(!label.is_canonical());
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let label = normalize(Some("   ")).unwrap();
        assert_eq!(label.as_str(), "");
    }

    #[test]
    fn test_absent_stays_absent() {
        assert!(normalize(None).is_none());
    }

    #[test]
    fn test_canonical_labels() {
        let labels: Vec<_> = canonical_labels().collect();
        assert_eq!(labels, vec!["clothing", "electronics", "groceries", "accessories"]);
        assert!(labels.iter().all(|l| CategoryLabel::parse(l).is_canonical()));
    }

    #[test]
    fn test_synonyms_of() {
        assert!(synonyms_of("accessories").contains(&"backpacks"));
        assert!(synonyms_of("furniture").is_empty());
    }
}
