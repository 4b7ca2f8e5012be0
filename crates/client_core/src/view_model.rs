//! The course list screen: owns the fetched collection and the list
//! [`ViewState`], routing every change through [`list::reduce`].

use std::sync::Arc;

use shared::domain::{Course, CourseId};
use tracing::{info, warn};

use crate::{
    error::RepositoryError,
    list::{self, CourseListView, ListEvent, ViewState},
    notice::{Notice, NoticeContext, NoticeQueue},
    CourseRepository,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The backend no longer had the course; any local copy was dropped.
    AlreadyGone,
}

pub struct CourseListViewModel {
    repository: Arc<dyn CourseRepository>,
    courses: Vec<Course>,
    state: ViewState,
    notices: NoticeQueue,
}

impl CourseListViewModel {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self {
            repository,
            courses: Vec::new(),
            state: ViewState::default(),
            notices: NoticeQueue::default(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> CourseListView {
        list::project(&self.courses, &self.state)
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    fn apply(&mut self, event: ListEvent) {
        self.state = list::reduce(&self.state, &self.courses, event);
    }

    /// Replaces the collection with the backend's. Filters are kept; on
    /// failure the collection is emptied so the derived view stays consistent.
    pub async fn load(&mut self) -> Result<usize, RepositoryError> {
        match self.repository.fetch_all().await {
            Ok(courses) => {
                info!(count = courses.len(), "courses: loaded");
                self.courses = courses;
                self.apply(ListEvent::CoursesChanged);
                Ok(self.courses.len())
            }
            Err(err) => {
                warn!(error = %err, "courses: load failed");
                self.courses.clear();
                self.apply(ListEvent::CoursesChanged);
                self.notices
                    .push(Notice::from_repository_error(NoticeContext::Load, &err));
                Err(err)
            }
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.apply(ListEvent::SearchChanged(text.into()));
    }

    pub fn set_teacher_filter(&mut self, teacher: impl Into<String>) {
        self.apply(ListEvent::TeacherFilterChanged(teacher.into()));
    }

    /// Returns whether the page changed; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let before = self.state.page_number;
        self.apply(ListEvent::PageRequested(page));
        self.state.page_number != before
    }

    pub fn next_page(&mut self) -> bool {
        let current = self.view().current_page as i64;
        self.go_to_page(current + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        let current = self.view().current_page as i64;
        self.go_to_page(current - 1)
    }

    /// Deletes a course the user has already confirmed removing.
    ///
    /// The page is only ever clamped downward afterwards, so deleting from a
    /// later page keeps the user there while that page still exists.
    pub async fn delete_course(&mut self, id: CourseId) -> Result<DeleteOutcome, RepositoryError> {
        let outcome = match self.repository.delete(id.clone()).await {
            Ok(()) => {
                info!(course_id = %id, "courses: deleted");
                self.notices.push(Notice::success("Xóa thành công"));
                DeleteOutcome::Deleted
            }
            Err(RepositoryError::NotFound(_)) => {
                warn!(course_id = %id, "courses: delete target already gone");
                DeleteOutcome::AlreadyGone
            }
            Err(err) => {
                warn!(course_id = %id, error = %err, "courses: delete failed");
                self.notices
                    .push(Notice::from_repository_error(NoticeContext::Delete, &err));
                return Err(err);
            }
        };

        self.courses.retain(|course| course.id != id);
        self.apply(ListEvent::CoursesChanged);
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
