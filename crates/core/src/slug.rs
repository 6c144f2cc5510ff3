//! URL slug derivation for project titles.
//!
//! The admin form recomputes the slug from the title on every keystroke while
//! a project is being created. Once a project exists its slug is edited by
//! hand and never re-derived.

/// Derive a URL-safe slug from a title.
///
/// The title is lowercased, every run of characters outside `[a-z0-9]` is
/// collapsed into a single `-`, and leading/trailing dashes are trimmed.
///
/// # Examples
///
/// ```
/// use showreel_core::slug::derive_slug;
///
/// assert_eq!(derive_slug("Hello, World!  Nike®"), "hello-world-nike");
/// assert_eq!(derive_slug("  --  "), "");
/// ```
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_symbols_collapse() {
        assert_eq!(derive_slug("Hello, World!  Nike®"), "hello-world-nike");
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = derive_slug("Google Brand Identity (2024 cut)");
        assert_eq!(once, "google-brand-identity-2024-cut");
        assert_eq!(derive_slug(&once), once);
    }

    #[test]
    fn leading_and_trailing_separators_trimmed() {
        assert_eq!(derive_slug("--Nike Motion--"), "nike-motion");
        assert_eq!(derive_slug("!!!"), "");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(derive_slug("Café Noir"), "caf-noir");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(derive_slug("Spot 30s v2"), "spot-30s-v2");
    }

    #[test]
    fn empty_title() {
        assert_eq!(derive_slug(""), "");
    }
}
