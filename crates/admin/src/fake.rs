//! In-memory [`AdminApi`] used by the screen tests.

use std::sync::Mutex;

use chrono::Utc;
use showreel_core::reorder::ReorderEntry;

use crate::api::AdminApi;
use crate::client::ClientError;
use crate::models::{ProjectDocument, ProjectRecord, Session, SessionUser};

#[derive(Default)]
pub struct FakeApi {
    pub signed_in: bool,
    /// `session()` fails as if the server were unreachable.
    pub fail_session: bool,
    /// `session()` answers 401.
    pub reject_session: bool,
    pub fail_list: bool,
    pub fail_reorder: bool,
    pub fail_delete: bool,
    pub fail_upload: bool,
    pub projects: Mutex<Vec<ProjectRecord>>,
    pub reorders: Mutex<Vec<Vec<ReorderEntry>>>,
    pub created: Mutex<Vec<ProjectDocument>>,
    pub updated: Mutex<Vec<(String, ProjectDocument)>>,
    pub deleted: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn signed_in(titles: &[&str]) -> Self {
        let projects = titles
            .iter()
            .enumerate()
            .map(|(i, title)| record(&format!("id-{title}"), title, i as i32))
            .collect();
        Self {
            signed_in: true,
            projects: Mutex::new(projects),
            ..Default::default()
        }
    }
}

pub fn record(id: &str, title: &str, order: i32) -> ProjectRecord {
    let now = Utc::now();
    ProjectRecord {
        id: id.to_string(),
        slug: title.to_lowercase(),
        title: title.to_string(),
        client: String::new(),
        description: String::new(),
        video_url: String::new(),
        thumbnail: String::new(),
        image1: String::new(),
        image2: String::new(),
        image3: String::new(),
        team: Vec::new(),
        color: "#ff6b35".to_string(),
        order,
        published: true,
        created_at: now,
        updated_at: now,
    }
}

fn from_document(id: &str, doc: &ProjectDocument) -> ProjectRecord {
    ProjectRecord {
        slug: doc.slug.clone(),
        client: doc.client.clone(),
        description: doc.description.clone(),
        video_url: doc.video_url.clone(),
        thumbnail: doc.thumbnail.clone(),
        image1: doc.image1.clone(),
        image2: doc.image2.clone(),
        image3: doc.image3.clone(),
        team: doc.team.clone(),
        color: doc.color.clone(),
        published: doc.published,
        ..record(id, &doc.title, 0)
    }
}

fn upstream() -> ClientError {
    ClientError::Upstream {
        status: 500,
        message: "Internal server error".into(),
    }
}

impl AdminApi for FakeApi {
    async fn session(&self) -> Result<Option<Session>, ClientError> {
        if self.fail_session {
            return Err(upstream());
        }
        if self.reject_session {
            return Err(ClientError::Unauthorized("Session expired".into()));
        }
        Ok(self.signed_in.then(|| Session {
            user: SessionUser {
                id: "admin".into(),
                email: "admin@studio.test".into(),
                name: "Admin".into(),
            },
            expires_at: Utc::now(),
        }))
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        if self.fail_list {
            return Err(upstream());
        }
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_project(&self, id: &str) -> Result<ProjectRecord, ClientError> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Project not found".into()))
    }

    async fn create_project(
        &self,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        let mut projects = self.projects.lock().unwrap();
        if projects.iter().any(|p| p.slug == document.slug) {
            return Err(ClientError::Conflict(
                "A project with this slug already exists".into(),
            ));
        }
        self.created.lock().unwrap().push(document.clone());
        let created = from_document(&format!("id-{}", document.slug), document);
        projects.push(created.clone());
        Ok(created)
    }

    async fn update_project(
        &self,
        id: &str,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), document.clone()));
        Ok(from_document(id, document))
    }

    async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        if self.fail_delete {
            return Err(upstream());
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn reorder_projects(&self, updates: &[ReorderEntry]) -> Result<(), ClientError> {
        self.reorders.lock().unwrap().push(updates.to_vec());
        if self.fail_reorder {
            return Err(upstream());
        }
        Ok(())
    }

    async fn upload_image(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        if self.fail_upload {
            return Err(upstream());
        }
        tokio::task::yield_now().await;
        self.uploads.lock().unwrap().push(file_name.to_string());
        Ok(format!("https://cdn.test/portfolio/{file_name}"))
    }
}
