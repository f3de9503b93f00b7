//! Draft validation rules.

use crate::domain::StepDraft;
use std::fmt;

/// Error returned when a draft fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A step must carry at least one of title, description, code, or image.
    EmptyStep,
    /// A note title cannot be empty or whitespace-only.
    EmptyTitle,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyStep => {
                write!(f, "step needs a title, description, code, or image")
            }
            ValidationError::EmptyTitle => write!(f, "title cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks that a step draft carries at least one non-empty content field.
///
/// Steps marked for removal skip the check; an empty row that is being
/// deleted is fine.
pub fn validate_step(draft: &StepDraft) -> Result<(), ValidationError> {
    if draft.remove {
        return Ok(());
    }

    let filled = [&draft.title, &draft.description, &draft.code, &draft.image]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty()));

    if filled {
        Ok(())
    } else {
        Err(ValidationError::EmptyStep)
    }
}

/// Checks that a note title has visible content.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_with_all_fields_empty_is_rejected() {
        let draft = StepDraft::default();
        assert_eq!(validate_step(&draft), Err(ValidationError::EmptyStep));
    }

    #[test]
    fn step_with_whitespace_only_fields_is_rejected() {
        let draft = StepDraft {
            title: Some("   ".into()),
            description: Some("\n".into()),
            ..Default::default()
        };
        assert_eq!(validate_step(&draft), Err(ValidationError::EmptyStep));
    }

    #[test]
    fn step_with_any_single_field_passes() {
        for draft in [
            StepDraft {
                title: Some("Prep".into()),
                ..Default::default()
            },
            StepDraft {
                description: Some("turn it off first".into()),
                ..Default::default()
            },
            StepDraft {
                code: Some("systemctl stop oven".into()),
                ..Default::default()
            },
            StepDraft {
                image: Some("steps/wiring.png".into()),
                ..Default::default()
            },
        ] {
            assert_eq!(validate_step(&draft), Ok(()));
        }
    }

    #[test]
    fn empty_step_marked_for_removal_passes() {
        let draft = StepDraft {
            remove: true,
            ..Default::default()
        };
        assert_eq!(validate_step(&draft), Ok(()));
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("  \t"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("Fix oven"), Ok(()));
    }
}
