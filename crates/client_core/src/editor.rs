//! Add/edit course form flow.

use std::sync::Arc;

use shared::{
    domain::{Course, CourseId, CourseInput},
    validation::{validate_course_input, ValidationErrors},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    error::RepositoryError,
    notice::{Notice, NoticeContext, NoticeQueue},
    CourseRepository,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit(CourseId),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct CourseEditor {
    repository: Arc<dyn CourseRepository>,
    mode: EditorMode,
    notices: NoticeQueue,
}

impl CourseEditor {
    /// `id` selects edit mode; without one the editor creates a new course.
    pub fn new(repository: Arc<dyn CourseRepository>, id: Option<CourseId>) -> Self {
        let mode = id.map_or(EditorMode::Add, EditorMode::Edit);
        Self {
            repository,
            mode,
            notices: NoticeQueue::default(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Values to prefill the form with: the stored course in edit mode,
    /// `None` in add mode.
    pub async fn load_detail(&self) -> Result<Option<CourseInput>, RepositoryError> {
        let EditorMode::Edit(id) = &self.mode else {
            return Ok(None);
        };
        match self.repository.fetch(id.clone()).await {
            Ok(course) => Ok(Some(course.to_input())),
            Err(err) => {
                warn!(course_id = %id, error = %err, "editor: failed to load course detail");
                Err(err)
            }
        }
    }

    /// Form values to start editing from. A detail that cannot be loaded
    /// leaves the form blank and queues an error notice; the fields the
    /// caller fills in are then judged by validation on submit.
    pub async fn prefill(&mut self) -> CourseInput {
        match self.load_detail().await {
            Ok(detail) => detail.unwrap_or_default(),
            Err(err) => {
                self.notices
                    .push(Notice::from_repository_error(NoticeContext::Detail, &err));
                CourseInput::default()
            }
        }
    }

    /// Validates locally, then creates or replaces the course.
    pub async fn submit(&mut self, input: CourseInput) -> Result<Course, SubmitError> {
        validate_course_input(&input)?;

        let result = match &self.mode {
            EditorMode::Add => self.repository.create(input).await,
            EditorMode::Edit(id) => self.repository.update(id.clone(), input).await,
        };

        match result {
            Ok(course) => {
                info!(course_id = %course.id, mode = ?self.mode, "editor: course saved");
                self.notices.push(Notice::success("Thành công"));
                Ok(course)
            }
            Err(err) => {
                warn!(mode = ?self.mode, error = %err, "editor: submit failed");
                self.notices
                    .push(Notice::from_repository_error(NoticeContext::Submit, &err));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
