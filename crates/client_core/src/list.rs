//! Search, teacher filter and pagination over an in-memory course list.
//!
//! Everything here is pure: [`reduce`] maps a [`ViewState`] and an event to
//! the next state, and [`project`] derives what a list screen displays.

use shared::domain::Course;

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    /// `None` shows every teacher.
    pub teacher_filter: Option<String>,
    /// 1-indexed.
    pub page_number: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            teacher_filter: None,
            page_number: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    SearchChanged(String),
    /// Empty string clears the filter.
    TeacherFilterChanged(String),
    PageRequested(i64),
    /// The course collection was replaced or shrank.
    CoursesChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseListView {
    pub items: Vec<Course>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_filtered: usize,
    /// 1-indexed inclusive bounds of `items` within the filtered list, 0 when empty.
    pub range_start: usize,
    pub range_end: usize,
    pub teacher_options: Vec<String>,
}

impl CourseListView {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

pub fn matches(course: &Course, state: &ViewState) -> bool {
    let name_matches = course
        .name
        .to_lowercase()
        .contains(&state.search_text.to_lowercase());
    let teacher_matches = state
        .teacher_filter
        .as_deref()
        .map_or(true, |teacher| course.teacher == teacher);
    name_matches && teacher_matches
}

pub fn filter_courses<'a>(courses: &'a [Course], state: &ViewState) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| matches(course, state))
        .collect()
}

pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

pub fn current_page(state: &ViewState, filtered_len: usize) -> usize {
    state.page_number.clamp(1, total_pages(filtered_len))
}

/// Distinct non-empty teachers in first-appearance order.
pub fn teacher_options(courses: &[Course]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for course in courses {
        if !course.teacher.is_empty() && !options.contains(&course.teacher) {
            options.push(course.teacher.clone());
        }
    }
    options
}

pub fn reduce(state: &ViewState, courses: &[Course], event: ListEvent) -> ViewState {
    let mut next = state.clone();
    match event {
        ListEvent::SearchChanged(text) => {
            next.search_text = text;
            next.page_number = 1;
        }
        ListEvent::TeacherFilterChanged(teacher) => {
            next.teacher_filter = (!teacher.is_empty()).then_some(teacher);
            next.page_number = 1;
        }
        ListEvent::PageRequested(page) => {
            let pages = total_pages(filter_courses(courses, state).len());
            if let Ok(page) = usize::try_from(page) {
                if (1..=pages).contains(&page) {
                    next.page_number = page;
                }
            }
        }
        ListEvent::CoursesChanged => {
            let pages = total_pages(filter_courses(courses, state).len());
            if next.page_number > pages {
                next.page_number = pages;
            }
        }
    }
    next
}

pub fn project(courses: &[Course], state: &ViewState) -> CourseListView {
    let filtered = filter_courses(courses, state);
    let total_filtered = filtered.len();
    let total_pages = total_pages(total_filtered);
    let current_page = current_page(state, total_filtered);
    let start = (current_page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_filtered);
    let items = filtered[start..end].iter().map(|c| (*c).clone()).collect();

    let (range_start, range_end) = if total_filtered == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    CourseListView {
        items,
        total_pages,
        current_page,
        total_filtered,
        range_start,
        range_end,
        teacher_options: teacher_options(courses),
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
