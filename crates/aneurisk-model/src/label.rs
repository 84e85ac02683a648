#![deny(unsafe_code)]

use std::fmt;

use crate::{LabelError, Result};

/// Case numbers registered in the Aneurisk repository with two aneurysms.
///
/// These cases only exist on disk as their `a`/`b` sub-cases, so a bare
/// numeric id or bare `C00##` label never resolves for them.
pub const MULTI_ANEURYSM_CASE_IDS: [u32; 4] = [28, 57, 74, 88];

/// Lowest valid numeric case id.
pub const MIN_CASE_ID: i64 = 1;
/// Highest valid numeric case id.
pub const MAX_CASE_ID: i64 = 99;

/// A case identifier as supplied by a caller: either a numeric id or a
/// textual label, resolved into a [`CaseLabel`] by [`CaseLabel::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseId {
    Numeric(i64),
    Label(String),
}

impl From<i64> for CaseId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for CaseId {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for CaseId {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// Canonical case label, `C####` or `C####a`/`C####b`.
///
/// Doubles as the directory name under `models/` and as the row key of the
/// cases table, so it is kept exactly as validated.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CaseLabel(String);

impl CaseLabel {
    /// Validate a textual label. Shorthand for [`CaseLabel::resolve`] with a
    /// string input.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        Self::resolve(CaseId::Label(label.into()))
    }

    /// Resolve a case identifier into its canonical label.
    ///
    /// Numeric ids must lie in [1, 99] and must not belong to a
    /// multi-aneurysm case; those resolve to the zero-padded `C####` form.
    /// Textual labels must start with `C` and contain exactly four digits;
    /// a label for a multi-aneurysm case must already carry its `a`/`b`
    /// suffix. Valid labels are returned unchanged.
    ///
    /// # Errors
    ///
    /// [`LabelError::OutOfRange`] for numeric ids outside [1, 99],
    /// [`LabelError::Ambiguous`] for multi-aneurysm cases referenced without
    /// a sub-label, [`LabelError::Malformed`] for anything else.
    pub fn resolve(id: impl Into<CaseId>) -> Result<Self> {
        match id.into() {
            CaseId::Numeric(id) => {
                if !(MIN_CASE_ID..=MAX_CASE_ID).contains(&id) {
                    return Err(LabelError::OutOfRange { id });
                }
                let id = u32::try_from(id).map_err(|_| LabelError::OutOfRange { id })?;
                if let Some(choices) = multi_aneurysm_sub_labels(id) {
                    return Err(LabelError::Ambiguous {
                        id,
                        choices: choices.to_vec(),
                    });
                }
                Ok(Self(format_label(id)))
            }
            CaseId::Label(label) => {
                let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
                if !label.starts_with('C') || digits.len() != 4 {
                    return Err(LabelError::Malformed { input: label });
                }
                let id: u32 = digits.parse().map_err(|_| LabelError::Malformed {
                    input: label.clone(),
                })?;
                // The range check deliberately only gates the ambiguity
                // rejection: a well-formed label whose digits fall outside
                // [1, 99] passes through unchanged, matching the repository's
                // historical behavior.
                if (MIN_CASE_ID..=MAX_CASE_ID).contains(&i64::from(id))
                    && let Some(choices) = multi_aneurysm_sub_labels(id)
                    && !choices.contains(&label)
                {
                    return Err(LabelError::Ambiguous {
                        id,
                        choices: choices.to_vec(),
                    });
                }
                Ok(Self(label))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric case id recovered from the label by stripping the `C`
    /// prefix and any `a`/`b` suffix. Both sub-labels of a multi-aneurysm
    /// case map back to the same id.
    pub fn numeric_id(&self) -> Option<u32> {
        numeric_case_id(&self.0)
    }
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The two registered sub-labels of a multi-aneurysm case, or `None` when
/// the id is a single-aneurysm case.
pub fn multi_aneurysm_sub_labels(id: u32) -> Option<[String; 2]> {
    if MULTI_ANEURYSM_CASE_IDS.contains(&id) {
        let base = format_label(id);
        Some([format!("{base}a"), format!("{base}b")])
    } else {
        None
    }
}

/// Strip the `C` prefix and `a`/`b` suffix from a label and parse the
/// remainder as a case id. Returns `None` for strings that are not labels.
pub fn numeric_case_id(label: &str) -> Option<u32> {
    label
        .trim_start_matches('C')
        .trim_end_matches(['a', 'b'])
        .parse()
        .ok()
}

fn format_label(id: u32) -> String {
    format!("C{id:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_labels_cover_registry_only() {
        assert_eq!(
            multi_aneurysm_sub_labels(28),
            Some(["C0028a".to_string(), "C0028b".to_string()])
        );
        assert_eq!(multi_aneurysm_sub_labels(29), None);
    }

    #[test]
    fn numeric_id_strips_prefix_and_suffix() {
        assert_eq!(numeric_case_id("C0042"), Some(42));
        assert_eq!(numeric_case_id("C0028a"), Some(28));
        assert_eq!(numeric_case_id("C0028b"), Some(28));
        assert_eq!(numeric_case_id("not-a-label"), None);
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let label = CaseLabel::resolve(42).unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"C0042\"");
        let round: CaseLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(round, label);
    }
}
