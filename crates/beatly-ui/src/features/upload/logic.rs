//! Upload form validation and tag-list operations.
//!
//! # Design
//! - Validate every rule client-side; an invalid form never reaches the API.
//! - Tags normalize on entry (trimmed, lowercased) so duplicates compare
//!   exactly afterwards.

/// Minimum title length.
pub const TITLE_MIN: usize = 3;
/// Maximum title length.
pub const TITLE_MAX: usize = 100;
/// Minimum description length.
pub const DESCRIPTION_MIN: usize = 10;
/// Maximum description length.
pub const DESCRIPTION_MAX: usize = 500;
/// Maximum number of tags per video.
pub const MAX_TAGS: usize = 10;

/// Per-field validation errors, mirroring the form layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadErrors {
    /// Title rule violation, if any.
    pub title: Option<String>,
    /// Description rule violation, if any.
    pub description: Option<String>,
    /// Tag rule violation, if any.
    pub tags: Option<String>,
    /// Missing-video violation, if any.
    pub video: Option<String>,
}

impl UploadErrors {
    /// Whether the form passed every rule.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.video.is_none()
    }
}

/// Validate the title field alone.
#[must_use]
pub fn validate_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Some("Title is required".to_string())
    } else if trimmed.chars().count() < TITLE_MIN || trimmed.chars().count() > TITLE_MAX {
        Some(format!("Title must be between {TITLE_MIN} and {TITLE_MAX} characters"))
    } else {
        None
    }
}

/// Validate the description field alone.
#[must_use]
pub fn validate_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        Some("Description is required".to_string())
    } else if trimmed.chars().count() < DESCRIPTION_MIN
        || trimmed.chars().count() > DESCRIPTION_MAX
    {
        Some(format!(
            "Description must be between {DESCRIPTION_MIN} and {DESCRIPTION_MAX} characters"
        ))
    } else {
        None
    }
}

/// Validate the whole form before submission.
#[must_use]
pub fn validate(title: &str, description: &str, tags: &[String], has_video: bool) -> UploadErrors {
    let tag_error = if tags.is_empty() {
        Some("At least one tag is required".to_string())
    } else if tags.len() > MAX_TAGS {
        Some(format!("Maximum of {MAX_TAGS} tags allowed"))
    } else {
        None
    };
    UploadErrors {
        title: validate_title(title),
        description: validate_description(description),
        tags: tag_error,
        video: (!has_video).then(|| "Video file is required".to_string()),
    }
}

/// Outcome of attempting to add a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagAdd {
    /// The normalized tag was appended; the new list is returned.
    Added(Vec<String>),
    /// The normalized tag already exists; the list is unchanged.
    Duplicate,
    /// The list already holds [`MAX_TAGS`] entries.
    LimitReached,
    /// The input was empty after trimming.
    Empty,
}

/// Add a tag, normalizing to trimmed lowercase and rejecting duplicates
/// case-insensitively.
#[must_use]
pub fn add_tag(tags: &[String], raw: &str) -> TagAdd {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return TagAdd::Empty;
    }
    if tags.iter().any(|tag| tag.eq_ignore_ascii_case(&normalized)) {
        return TagAdd::Duplicate;
    }
    if tags.len() >= MAX_TAGS {
        return TagAdd::LimitReached;
    }
    let mut next = tags.to_vec();
    next.push(normalized);
    TagAdd::Added(next)
}

/// Remove exactly one entry matching the given value.
#[must_use]
pub fn remove_tag(tags: &[String], value: &str) -> Vec<String> {
    let mut next = tags.to_vec();
    if let Some(position) = next.iter().position(|tag| tag == value) {
        next.remove(position);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{
        MAX_TAGS, TagAdd, add_tag, remove_tag, validate, validate_description, validate_title,
    };

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn title_boundaries() {
        assert!(validate_title("ab").is_some());
        assert!(validate_title("abc").is_none());
        assert!(validate_title(&"x".repeat(100)).is_none());
        assert!(validate_title(&"x".repeat(101)).is_some());
        assert!(validate_title("   ").is_some());
    }

    #[test]
    fn description_boundaries() {
        assert!(validate_description(&"x".repeat(9)).is_some());
        assert!(validate_description(&"x".repeat(10)).is_none());
        assert!(validate_description(&"x".repeat(500)).is_none());
        assert!(validate_description(&"x".repeat(501)).is_some());
    }

    #[test]
    fn eleventh_tag_is_rejected() {
        let full: Vec<String> = (0..MAX_TAGS).map(|n| format!("tag{n}")).collect();
        assert_eq!(add_tag(&full, "eleventh"), TagAdd::LimitReached);
    }

    #[test]
    fn duplicate_tags_are_a_no_op_case_insensitively() {
        let existing = tags(&["synth", "live"]);
        assert_eq!(add_tag(&existing, "  SYNTH "), TagAdd::Duplicate);
        assert_eq!(add_tag(&existing, "synth"), TagAdd::Duplicate);
    }

    #[test]
    fn added_tags_are_normalized() {
        let TagAdd::Added(next) = add_tag(&tags(&["live"]), "  Lo-Fi ") else {
            panic!("expected Added");
        };
        assert_eq!(next, tags(&["live", "lo-fi"]));
    }

    #[test]
    fn blank_tag_input_is_ignored() {
        assert_eq!(add_tag(&[], "   "), TagAdd::Empty);
    }

    #[test]
    fn remove_takes_exactly_one_entry() {
        let list = tags(&["a", "b", "a"]);
        let next = remove_tag(&list, "a");
        assert_eq!(next, tags(&["b", "a"]));
        let unchanged = remove_tag(&next, "missing");
        assert_eq!(unchanged, next);
    }

    #[test]
    fn whole_form_validation_collects_field_errors() {
        let errors = validate("ok", "too short", &[], false);
        assert!(errors.title.is_some());
        assert!(errors.description.is_some());
        assert!(errors.tags.is_some());
        assert!(errors.video.is_some());
        assert!(!errors.is_clean());

        let clean = validate("A valid title", "A long enough description", &tags(&["t"]), true);
        assert!(clean.is_clean());
    }
}
