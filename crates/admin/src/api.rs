//! The seam between the admin screens and the server.

use showreel_core::reorder::ReorderEntry;

use crate::client::{AdminClient, ClientError};
use crate::models::{ProjectDocument, ProjectRecord, Session};

/// Operations the admin screens need from the server.
///
/// Implemented by [`AdminClient`]; tests provide an in-memory fake.
pub trait AdminApi: Send + Sync {
    fn session(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Session>, ClientError>> + Send;

    fn list_projects(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ProjectRecord>, ClientError>> + Send;

    fn get_project(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<ProjectRecord, ClientError>> + Send;

    fn create_project(
        &self,
        document: &ProjectDocument,
    ) -> impl std::future::Future<Output = Result<ProjectRecord, ClientError>> + Send;

    fn update_project(
        &self,
        id: &str,
        document: &ProjectDocument,
    ) -> impl std::future::Future<Output = Result<ProjectRecord, ClientError>> + Send;

    fn delete_project(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), ClientError>> + Send;

    fn reorder_projects(
        &self,
        updates: &[ReorderEntry],
    ) -> impl std::future::Future<Output = Result<(), ClientError>> + Send;

    /// Store an image and return its public URL.
    fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<String, ClientError>> + Send;
}

impl AdminApi for AdminClient {
    async fn session(&self) -> Result<Option<Session>, ClientError> {
        AdminClient::session(self).await
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        AdminClient::list_projects(self).await
    }

    async fn get_project(&self, id: &str) -> Result<ProjectRecord, ClientError> {
        AdminClient::get_project(self, id).await
    }

    async fn create_project(
        &self,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        AdminClient::create_project(self, document).await
    }

    async fn update_project(
        &self,
        id: &str,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        AdminClient::update_project(self, id, document).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        AdminClient::delete_project(self, id).await
    }

    async fn reorder_projects(&self, updates: &[ReorderEntry]) -> Result<(), ClientError> {
        AdminClient::reorder_projects(self, updates).await
    }

    async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        AdminClient::upload_image(self, file_name, content_type, bytes).await
    }
}
