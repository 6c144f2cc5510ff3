//! Project list screen: loading, drag-to-reorder, and delete.
//!
//! ```text
//! Loading --load--> Ready --drag_start--> Dragging --drag_end--> Ready
//!    |                                                 (saving while the
//!    |--no session--> RedirectToLogin                   batch is in flight)
//!    +--session check failed--> Failed
//! ```
//!
//! Dragging rearranges the displayed rows live. Dropping submits the dense
//! rank of every row in one reorder request. A failed save is logged and the
//! optimistic order is kept.

use showreel_core::reorder::{dense_assignment, DragState, ReorderEntry};

use crate::api::AdminApi;
use crate::client::ClientError;
use crate::models::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Dragging,
    /// No session; the caller should navigate to the login page.
    RedirectToLogin,
    /// The session could not be checked. [`ListView::error`] has the message.
    Failed,
}

#[derive(Debug)]
pub struct ListView {
    phase: ListPhase,
    projects: Vec<ProjectRecord>,
    drag: DragState,
    saving: bool,
    error: Option<String>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            projects: Vec::new(),
            drag: DragState::default(),
            saving: false,
            error: None,
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// `true` while a reorder batch is being persisted.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Inline error from the last failed delete or session check.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check the session, then fetch every project.
    pub async fn load(&mut self, api: &impl AdminApi) {
        self.phase = ListPhase::Loading;

        match api.session().await {
            Ok(Some(_)) => {}
            Ok(None) | Err(ClientError::Unauthorized(_)) => {
                self.phase = ListPhase::RedirectToLogin;
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed");
                self.error = Some(e.user_message());
                self.phase = ListPhase::Failed;
                return;
            }
        }

        self.projects = match api.list_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load projects");
                Vec::new()
            }
        };
        self.phase = ListPhase::Ready;
    }

    /// Begin dragging the row at `index`. Ignored outside `Ready`.
    pub fn drag_start(&mut self, index: usize) {
        if self.phase != ListPhase::Ready || index >= self.projects.len() {
            return;
        }
        self.drag.start(index);
        self.phase = ListPhase::Dragging;
    }

    /// The pointer moved over row `index`. Returns `true` when rows moved.
    pub fn drag_over(&mut self, index: usize) -> bool {
        if self.phase != ListPhase::Dragging {
            return false;
        }
        self.drag.over(&mut self.projects, index)
    }

    /// Finish the gesture and return the batch to persist.
    ///
    /// The local `order` fields are rewritten to match the batch.
    pub fn drag_end(&mut self) -> Option<Vec<ReorderEntry>> {
        if self.phase != ListPhase::Dragging {
            return None;
        }
        self.drag.end();
        self.phase = ListPhase::Ready;

        let updates = dense_assignment(&self.projects, |p| p.id.as_str());
        for (project, entry) in self.projects.iter_mut().zip(&updates) {
            project.order = entry.order;
        }
        Some(updates)
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    /// End the drag and persist the new order.
    pub async fn drop_and_save(&mut self, api: &impl AdminApi) {
        let Some(updates) = self.drag_end() else {
            return;
        };

        self.begin_save();
        if let Err(e) = api.reorder_projects(&updates).await {
            tracing::warn!(error = %e, count = updates.len(), "Failed to save project order");
        }
        self.finish_save();
    }

    /// Delete the project `id` after `confirm` approves it.
    ///
    /// Returns `true` when the row was removed.
    pub async fn delete(
        &mut self,
        api: &impl AdminApi,
        id: &str,
        confirm: impl FnOnce(&ProjectRecord) -> bool,
    ) -> bool {
        let Some(project) = self.projects.iter().find(|p| p.id == id) else {
            return false;
        };
        if !confirm(project) {
            return false;
        }

        match api.delete_project(id).await {
            Ok(()) => {
                self.projects.retain(|p| p.id != id);
                self.error = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, project_id = %id, "Failed to delete project");
                self.error = Some(e.user_message());
                false
            }
        }
    }
}
