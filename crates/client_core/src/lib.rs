use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{Course, CourseId, CourseInput},
    error::ApiError,
};
use tracing::{debug, info};
use url::Url;

pub mod auth;
pub mod editor;
pub mod error;
pub mod list;
pub mod notice;
pub mod view_model;

pub use editor::{CourseEditor, EditorMode, SubmitError};
pub use error::RepositoryError;
pub use list::{CourseListView, ListEvent, ViewState, PAGE_SIZE};
pub use notice::{Notice, NoticeLevel};
pub use view_model::{CourseListViewModel, DeleteOutcome};

const COURSES_PATH: &str = "courses";

/// CRUD access to the course collection held by the backend.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Course>, RepositoryError>;
    async fn fetch(&self, id: CourseId) -> Result<Course, RepositoryError>;
    async fn create(&self, course: CourseInput) -> Result<Course, RepositoryError>;
    async fn update(&self, id: CourseId, course: CourseInput) -> Result<Course, RepositoryError>;
    async fn delete(&self, id: CourseId) -> Result<(), RepositoryError>;
}

/// [`CourseRepository`] over a json-server style `/courses` REST resource.
pub struct HttpCourseRepository {
    http: Client,
    base_url: Url,
}

impl HttpCourseRepository {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, mut base_url: Url) -> Self {
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { http, base_url }
    }

    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url, RepositoryError> {
        self.base_url
            .join(COURSES_PATH)
            .map_err(|e| RepositoryError::Network(format!("invalid courses url: {e}")))
    }

    /// `courses/{id}`, with the id percent-encoded as a single segment.
    fn item_url(&self, id: &CourseId) -> Result<Url, RepositoryError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| RepositoryError::Network("invalid course url".into()))?
            .push(id.as_str());
        Ok(url)
    }
}

/// Maps non-2xx replies onto [`RepositoryError`]; `item` is the course the
/// request addressed, if any, so a 404 can name it.
async fn check_status(
    response: Response,
    item: Option<&CourseId>,
) -> Result<Response, RepositoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = item {
            return Err(RepositoryError::NotFound(id.clone()));
        }
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|api_error| api_error.message)
        .unwrap_or_else(|_| status.to_string());

    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        Err(RepositoryError::Validation(message))
    } else {
        Err(RepositoryError::Network(format!(
            "unexpected status {status}: {message}"
        )))
    }
}

#[async_trait]
impl CourseRepository for HttpCourseRepository {
    async fn fetch_all(&self) -> Result<Vec<Course>, RepositoryError> {
        let url = self.collection_url()?;
        debug!(%url, "http: fetching courses");
        let response = self.http.get(url).send().await?;
        let courses = check_status(response, None).await?.json().await?;
        Ok(courses)
    }

    async fn fetch(&self, id: CourseId) -> Result<Course, RepositoryError> {
        let response = self.http.get(self.item_url(&id)?).send().await?;
        let course = check_status(response, Some(&id)).await?.json().await?;
        Ok(course)
    }

    async fn create(&self, course: CourseInput) -> Result<Course, RepositoryError> {
        let response = self
            .http
            .post(self.collection_url()?)
            .json(&course)
            .send()
            .await?;
        let created: Course = check_status(response, None).await?.json().await?;
        info!(course_id = %created.id, "http: course created");
        Ok(created)
    }

    async fn update(&self, id: CourseId, course: CourseInput) -> Result<Course, RepositoryError> {
        let response = self
            .http
            .put(self.item_url(&id)?)
            .json(&course)
            .send()
            .await?;
        let updated = check_status(response, Some(&id)).await?.json().await?;
        info!(course_id = %id, "http: course updated");
        Ok(updated)
    }

    async fn delete(&self, id: CourseId) -> Result<(), RepositoryError> {
        let response = self.http.delete(self.item_url(&id)?).send().await?;
        check_status(response, Some(&id)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
