//! Project field defaults and validation.

use crate::error::CoreError;

/// Title color used when a project has none.
pub const DEFAULT_COLOR: &str = "#ff6b35";

/// Color a fresh admin form starts with (the first preset).
pub const FORM_DEFAULT_COLOR: &str = "#f7291e";

/// Named colors offered by the admin form.
pub const COLOR_PRESETS: &[(&str, &str)] = &[
    ("Red", "#f7291e"),
    ("Cyan", "#55b8d8"),
    ("Pink", "#f587d9"),
    ("Blue", "#367cf8"),
    ("Orange", "#e97020"),
    ("Green", "#74fd68"),
    ("Yellow", "#ebbf2b"),
    ("White", "#ffffff"),
];

/// Validate the fields a new project cannot do without.
pub fn validate_required(title: &str, slug: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() || slug.trim().is_empty() {
        return Err(CoreError::Validation("Title and slug are required".into()));
    }
    Ok(())
}

/// Validate a required field that is being replaced by an update.
///
/// Absent values are fine; present values must not be blank.
pub fn validate_replacement(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::Validation(format!(
            "{field} must not be empty"
        ))),
        _ => Ok(()),
    }
}

/// The color to render, falling back to [`DEFAULT_COLOR`] when unset.
pub fn color_or_default(color: &str) -> &str {
    if color.trim().is_empty() {
        DEFAULT_COLOR
    } else {
        color
    }
}

/// Gallery images in display order, skipping empty slots.
pub fn gallery_images(slots: &[&str]) -> Vec<String> {
    slots
        .iter()
        .filter(|url| !url.is_empty())
        .map(|url| url.to_string())
        .collect()
}
