//! Image gallery lightbox navigation.

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Moved(usize),
    Ignored,
}

/// Full-screen viewer over a project's gallery images.
///
/// Navigation wraps around in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
}

impl Lightbox {
    /// Open the viewer at `index`. Returns `None` for an empty gallery or an
    /// index past the end.
    pub fn open(images: Vec<String>, index: usize) -> Option<Self> {
        if index >= images.len() {
            return None;
        }
        Some(Self { images, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.images.len();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.index
    }

    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxAction {
        match key {
            LightboxKey::Escape => LightboxAction::Close,
            LightboxKey::ArrowRight => LightboxAction::Moved(self.next()),
            LightboxKey::ArrowLeft => LightboxAction::Moved(self.prev()),
            LightboxKey::Other => LightboxAction::Ignored,
        }
    }

    /// Position label such as `2 / 3`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Alt text for the current image.
    pub fn alt_text(&self, title: &str) -> String {
        format!("{title} - Image {}", self.index + 1)
    }
}
