//! Video URL interpretation.
//!
//! Project video links are pasted as watch/share URLs; the detail page needs
//! an iframe-embeddable player URL.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]+)")
        .expect("valid regex")
});

static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:vimeo\.com/(?:video/)?|player\.vimeo\.com/video/)(\d+)").expect("valid regex")
});

/// Convert a YouTube or Vimeo link into its embeddable player URL.
///
/// Unrecognized input (including URLs that already point at another player)
/// is returned unchanged.
///
/// ```
/// use showreel_core::video::embed_url;
///
/// assert_eq!(
///     embed_url("https://youtu.be/dQw4w9WgXcQ"),
///     "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
/// );
/// assert_eq!(embed_url("https://example.com/reel.mp4"), "https://example.com/reel.mp4");
/// ```
pub fn embed_url(url: &str) -> String {
    if let Some(id) = YOUTUBE_RE.captures(url).and_then(|c| c.get(1)) {
        return format!(
            "https://www.youtube.com/embed/{}?rel=0&modestbranding=1",
            id.as_str()
        );
    }

    if let Some(id) = VIMEO_RE.captures(url).and_then(|c| c.get(1)) {
        return format!(
            "https://player.vimeo.com/video/{}?title=0&byline=0&portrait=0",
            id.as_str()
        );
    }

    url.to_string()
}
