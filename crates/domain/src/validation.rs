//! Structural validation of candidate story documents.
//!
//! Validation runs over a [`StoryDraft`] - a candidate in which everything
//! is optional - and accumulates every violation rather than failing fast.
//! It never errors itself; callers inspect the report. This is invoked
//! independently of the fetch path (a prospective authoring flow validates
//! before submission).

use serde::{Deserialize, Serialize};

use crate::entities::{Narrative, Story, StoryMetadata, Storytelling, Subtext};
use crate::error::DomainError;
use crate::ids::{NarrativeId, StoryId};

/// A candidate story document, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_written: Option<String>,
    #[serde(default)]
    pub narratives: Vec<NarrativeDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StoryMetadata>,
}

/// A candidate narrative within a [`StoryDraft`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<Subtext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storytelling: Option<Storytelling>,
}

impl StoryDraft {
    /// Promote a validated draft into a well-formed [`Story`].
    pub fn into_story(self) -> Result<Story, DomainError> {
        let report = validate_story(&self);
        if !report.valid {
            return Err(DomainError::validation(report.errors));
        }
        Ok(Story {
            id: StoryId::new(self.id.unwrap_or_default()),
            title: self.title.unwrap_or_default(),
            author: self.author,
            date_written: self.date_written,
            narratives: self
                .narratives
                .into_iter()
                .map(|n| Narrative {
                    id: NarrativeId::new(n.id.unwrap_or_default()),
                    title: n.title.unwrap_or_default(),
                    subtext: n.subtext,
                    storytelling: n.storytelling,
                })
                .collect(),
            metadata: self.metadata,
        })
    }
}

/// Outcome of validating a story draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.valid {
            Ok(())
        } else {
            Err(DomainError::validation(self.errors))
        }
    }
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(|s| s.is_empty())
}

/// Check a candidate story against the minimal structural requirements.
///
/// Requires non-empty `id`, `title`, and at least one narrative; each
/// narrative requires `id` and `title`. All violations are accumulated.
pub fn validate_story(draft: &StoryDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if is_missing(&draft.id) {
        errors.push("Story ID is required".to_string());
    }
    if is_missing(&draft.title) {
        errors.push("Story title is required".to_string());
    }
    if draft.narratives.is_empty() {
        errors.push("Story must have at least one narrative".to_string());
    }

    for (index, narrative) in draft.narratives.iter().enumerate() {
        if is_missing(&narrative.id) {
            errors.push(format!("Narrative {} missing ID", index + 1));
        }
        if is_missing(&narrative.title) {
            errors.push(format!("Narrative {} missing title", index + 1));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_yields_exactly_three_errors() {
        let report = validate_story(&StoryDraft::default());
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Story ID is required",
                "Story title is required",
                "Story must have at least one narrative",
            ]
        );
    }

    #[test]
    fn narrative_without_title_yields_single_error() {
        let draft = StoryDraft {
            id: Some("x".to_string()),
            title: Some("y".to_string()),
            narratives: vec![NarrativeDraft {
                id: Some("n1".to_string()),
                ..NarrativeDraft::default()
            }],
            ..StoryDraft::default()
        };
        let report = validate_story(&draft);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Narrative 1 missing title"]);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let draft = StoryDraft {
            id: Some(String::new()),
            title: Some("y".to_string()),
            narratives: vec![NarrativeDraft {
                id: Some("n1".to_string()),
                title: Some("t".to_string()),
                ..NarrativeDraft::default()
            }],
            ..StoryDraft::default()
        };
        let report = validate_story(&draft);
        assert_eq!(report.errors, vec!["Story ID is required"]);
    }

    #[test]
    fn narrative_errors_use_one_based_indexing() {
        let draft = StoryDraft {
            id: Some("x".to_string()),
            title: Some("y".to_string()),
            narratives: vec![
                NarrativeDraft {
                    id: Some("n1".to_string()),
                    title: Some("t1".to_string()),
                    ..NarrativeDraft::default()
                },
                NarrativeDraft::default(),
            ],
            ..StoryDraft::default()
        };
        let report = validate_story(&draft);
        assert_eq!(
            report.errors,
            vec!["Narrative 2 missing ID", "Narrative 2 missing title"]
        );
    }

    #[test]
    fn valid_draft_passes_and_promotes() {
        let draft = StoryDraft {
            id: Some("x".to_string()),
            title: Some("y".to_string()),
            narratives: vec![NarrativeDraft {
                id: Some("n1".to_string()),
                title: Some("t".to_string()),
                ..NarrativeDraft::default()
            }],
            ..StoryDraft::default()
        };
        assert!(validate_story(&draft).valid);

        let story = draft.into_story().unwrap();
        assert_eq!(story.id.as_str(), "x");
        assert_eq!(story.narratives.len(), 1);
    }

    #[test]
    fn invalid_draft_fails_promotion_with_all_messages() {
        let err = StoryDraft::default().into_story().unwrap_err();
        assert_eq!(err.messages().len(), 3);
    }

    #[test]
    fn report_into_result_maps_to_domain_error() {
        let report = validate_story(&StoryDraft::default());
        let err = report.into_result().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
