//! Project create/edit form.
//!
//! While creating, every title change re-derives the slug. Once the project
//! exists the slug is only edited by hand. Submitting sends the whole
//! document, with team credits cleaned of blank entries.

use showreel_core::lightbox::Lightbox;
use showreel_core::project::{
    gallery_images, validate_required, COLOR_PRESETS, FORM_DEFAULT_COLOR,
};
use showreel_core::slug::derive_slug;
use showreel_core::team::TeamEditor;

use crate::api::AdminApi;
use crate::client::ClientError;
use crate::models::{ProjectDocument, ProjectRecord};
use crate::upload::ImageField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Outcome of opening the form page.
#[derive(Debug)]
pub enum FormOpen {
    Ready(Box<ProjectForm>),
    RedirectToLogin,
    /// The session or the project could not be loaded; carries the message
    /// to show.
    Failed(String),
}

/// The image slots of a project, each uploading independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFields {
    pub thumbnail: ImageField,
    pub image1: ImageField,
    pub image2: ImageField,
    pub image3: ImageField,
}

#[derive(Debug, Clone)]
pub struct ProjectForm {
    mode: FormMode,
    title: String,
    slug: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    color: String,
    pub published: bool,
    pub team: TeamEditor,
    pub images: ImageFields,
    submitting: bool,
    error: Option<String>,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::for_create()
    }
}

impl ProjectForm {
    /// A blank form for a new project.
    pub fn for_create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            slug: String::new(),
            client: String::new(),
            description: String::new(),
            video_url: String::new(),
            color: FORM_DEFAULT_COLOR.to_string(),
            published: true,
            team: TeamEditor::default(),
            images: ImageFields::default(),
            submitting: false,
            error: None,
        }
    }

    /// A form pre-filled from an existing project.
    pub fn for_edit(record: ProjectRecord) -> Self {
        Self {
            mode: FormMode::Edit { id: record.id },
            title: record.title,
            slug: record.slug,
            client: record.client,
            description: record.description,
            video_url: record.video_url,
            color: record.color,
            published: record.published,
            team: TeamEditor::new(record.team),
            images: ImageFields {
                thumbnail: ImageField::new(record.thumbnail),
                image1: ImageField::new(record.image1),
                image2: ImageField::new(record.image2),
                image3: ImageField::new(record.image3),
            },
            submitting: false,
            error: None,
        }
    }

    /// Gate on the session, then build the form for `id` (or a blank one).
    pub async fn open(api: &impl AdminApi, id: Option<&str>) -> FormOpen {
        match api.session().await {
            Ok(Some(_)) => {}
            Ok(None) | Err(ClientError::Unauthorized(_)) => return FormOpen::RedirectToLogin,
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed");
                return FormOpen::Failed(e.user_message());
            }
        }

        let Some(id) = id else {
            return FormOpen::Ready(Box::new(Self::for_create()));
        };
        match api.get_project(id).await {
            Ok(record) => FormOpen::Ready(Box::new(Self::for_edit(record))),
            Err(ClientError::Unauthorized(_)) => FormOpen::RedirectToLogin,
            Err(e) => {
                tracing::warn!(error = %e, project_id = %id, "Failed to load project");
                FormOpen::Failed(e.user_message())
            }
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if self.mode == FormMode::Create {
            self.slug = derive_slug(&self.title);
        }
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    /// Any hex string is accepted.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Pick one of [`COLOR_PRESETS`] by name. Returns `false` for unknown names.
    pub fn select_preset(&mut self, name: &str) -> bool {
        match COLOR_PRESETS.iter().find(|(preset, _)| *preset == name) {
            Some((_, hex)) => {
                self.color = hex.to_string();
                true
            }
            None => false,
        }
    }

    /// Preview the uploaded gallery images the way the site shows them,
    /// starting at gallery position `index`. `None` when nothing is uploaded.
    pub fn preview_gallery(&self, index: usize) -> Option<Lightbox> {
        let images = gallery_images(&[
            self.images.image1.value(),
            self.images.image2.value(),
            self.images.image3.value(),
        ]);
        Lightbox::open(images, index)
    }

    /// The document that will be submitted.
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            slug: self.slug.clone(),
            title: self.title.clone(),
            client: self.client.clone(),
            description: self.description.clone(),
            video_url: self.video_url.clone(),
            thumbnail: self.images.thumbnail.value().to_string(),
            image1: self.images.image1.value().to_string(),
            image2: self.images.image2.value().to_string(),
            image3: self.images.image3.value().to_string(),
            team: self.team.cleaned(),
            color: self.color.clone(),
            published: self.published,
        }
    }

    /// Validate and save. PUT when editing, create otherwise.
    ///
    /// On failure the message is kept for display and `None` is returned.
    pub async fn submit(&mut self, api: &impl AdminApi) -> Option<ProjectRecord> {
        if let Err(e) = validate_required(&self.title, &self.slug) {
            self.error = Some(match e {
                showreel_core::error::CoreError::Validation(msg) => msg,
                other => other.to_string(),
            });
            return None;
        }

        self.submitting = true;
        self.error = None;
        let document = self.to_document();
        let result = match &self.mode {
            FormMode::Create => api.create_project(&document).await,
            FormMode::Edit { id } => api.update_project(id, &document).await,
        };
        self.submitting = false;

        match result {
            Ok(record) => {
                tracing::debug!(project_id = %record.id, slug = %record.slug, "Project saved");
                Some(record)
            }
            Err(e) => {
                tracing::warn!(error = %e, slug = %document.slug, "Failed to save project");
                self.error = Some(e.user_message());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{record, FakeApi};
    use showreel_core::team::TeamMember;

    #[test]
    fn fresh_form_defaults() {
        let form = ProjectForm::for_create();
        assert_eq!(form.color(), "#f7291e");
        assert!(form.published);
        assert!(form.team.members().is_empty());
    }

    #[test]
    fn title_derives_slug_while_creating() {
        let mut form = ProjectForm::for_create();
        form.set_title("Hello, World!  Nike®");
        assert_eq!(form.slug(), "hello-world-nike");
        form.set_title("Hello Again");
        assert_eq!(form.slug(), "hello-again");
    }

    #[test]
    fn title_never_touches_slug_while_editing() {
        let mut form = ProjectForm::for_edit(record("p1", "Nike", 0));
        form.set_title("Adidas");
        assert_eq!(form.title(), "Adidas");
        assert_eq!(form.slug(), "nike");
    }

    #[test]
    fn presets_and_free_colors() {
        let mut form = ProjectForm::for_create();
        assert!(form.select_preset("Cyan"));
        assert_eq!(form.color(), "#55b8d8");
        assert!(!form.select_preset("Mauve"));
        assert_eq!(form.color(), "#55b8d8");
        form.set_color("#123456");
        assert_eq!(form.color(), "#123456");
    }

    #[test]
    fn document_cleans_team_and_copies_images() {
        let mut form = ProjectForm::for_create();
        form.set_title("Reel");
        form.team.add_member();
        form.team.set_name(0, 0, "  ");
        form.team.add_member();
        form.team.set_role(1, "Design");
        form.team.set_name(1, 0, "Ann");
        form.team.add_name(1);
        form.team.set_name(1, 1, "  ");
        form.team.add_name(1);
        form.team.set_name(1, 2, "Bo");
        form.images.image2.set_url("https://cdn.test/2.jpg");

        let doc = form.to_document();
        assert_eq!(doc.team, vec![TeamMember::new("Design", &["Ann", "Bo"])]);
        assert_eq!(doc.image2, "https://cdn.test/2.jpg");
        assert_eq!(doc.thumbnail, "");
    }

    #[test]
    fn gallery_preview_skips_empty_slots() {
        let mut form = ProjectForm::for_create();
        assert!(form.preview_gallery(0).is_none());

        form.images.image1.set_url("https://cdn.test/1.jpg");
        form.images.image3.set_url("https://cdn.test/3.jpg");
        let mut preview = form.preview_gallery(1).unwrap();
        assert_eq!(preview.current(), "https://cdn.test/3.jpg");
        assert_eq!(preview.counter(), "2 / 2");
        preview.next();
        assert_eq!(preview.current(), "https://cdn.test/1.jpg");
        assert!(form.preview_gallery(2).is_none());
    }

    #[tokio::test]
    async fn submit_requires_title_and_slug() {
        let api = FakeApi::signed_in(&[]);
        let mut form = ProjectForm::for_create();

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.error(), Some("Title and slug are required"));
        assert!(api.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_creates_in_create_mode() {
        let api = FakeApi::signed_in(&[]);
        let mut form = ProjectForm::for_create();
        form.set_title("New Reel");

        let saved = form.submit(&api).await.unwrap();
        assert_eq!(saved.slug, "new-reel");
        assert!(!form.is_submitting());
        assert_eq!(api.created.lock().unwrap().len(), 1);
        assert!(api.updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_puts_in_edit_mode() {
        let api = FakeApi::signed_in(&["Nike"]);
        let FormOpen::Ready(mut form) = ProjectForm::open(&api, Some("id-Nike")).await else {
            panic!("form should open");
        };
        form.description = "Updated".into();

        form.submit(&api).await.unwrap();
        let updated = api.updated.lock().unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, "id-Nike");
        assert_eq!(updated[0].1.description, "Updated");
    }

    #[tokio::test]
    async fn duplicate_slug_is_shown_inline() {
        let api = FakeApi::signed_in(&["Nike"]);
        let mut form = ProjectForm::for_create();
        form.set_title("Nike");

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.error(), Some("A project with this slug already exists"));
    }

    #[tokio::test]
    async fn open_without_session_redirects() {
        let api = FakeApi::default();
        assert!(matches!(
            ProjectForm::open(&api, None).await,
            FormOpen::RedirectToLogin
        ));
    }

    #[tokio::test]
    async fn open_with_unreachable_session_check_fails() {
        let api = FakeApi {
            fail_session: true,
            ..FakeApi::signed_in(&["Nike"])
        };
        assert!(matches!(
            ProjectForm::open(&api, Some("id-Nike")).await,
            FormOpen::Failed(ref msg) if msg == "Internal server error"
        ));
    }

    #[tokio::test]
    async fn open_with_rejected_session_redirects() {
        let api = FakeApi {
            reject_session: true,
            ..FakeApi::signed_in(&[])
        };
        assert!(matches!(
            ProjectForm::open(&api, None).await,
            FormOpen::RedirectToLogin
        ));
    }

    #[tokio::test]
    async fn open_unknown_project_fails() {
        let api = FakeApi::signed_in(&[]);
        assert!(matches!(
            ProjectForm::open(&api, Some("missing")).await,
            FormOpen::Failed(ref msg) if msg == "Project not found"
        ));
    }
}
