//! List and delete flows shared by the `list` and `delete` subcommands.

use anyhow::{Context, Result};
use clap::Args;
use client_core::{CourseListViewModel, DeleteOutcome};
use shared::domain::CourseId;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "")]
    pub teacher: String,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            teacher: String::new(),
            page: 1,
        }
    }
}

/// Loads the list and applies the requested search, filter and page in the
/// order a user would: filters first, since each resets the page.
///
/// A failed load still leaves an empty, renderable list behind; the error is
/// returned after the filters are applied so the caller can show both.
pub async fn load_list(view_model: &mut CourseListViewModel, args: ListArgs) -> Result<()> {
    let loaded = view_model.load().await;
    view_model.set_search_text(args.search);
    view_model.set_teacher_filter(args.teacher);
    if args.page != 1 && !view_model.go_to_page(args.page) {
        eprintln!(
            "Trang {} không tồn tại; hiển thị trang {}",
            args.page,
            view_model.view().current_page
        );
    }
    loaded.context("failed to load courses")?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFlow {
    Cancelled,
    Finished(DeleteOutcome),
}

/// Asks `confirm` and only then deletes `id` from an already loaded list.
pub async fn delete_confirmed(
    view_model: &mut CourseListViewModel,
    id: CourseId,
    confirm: impl FnOnce() -> Result<bool>,
) -> Result<DeleteFlow> {
    if !confirm()? {
        info!(course_id = %id, "delete cancelled");
        return Ok(DeleteFlow::Cancelled);
    }
    let outcome = view_model.delete_course(id).await?;
    Ok(DeleteFlow::Finished(outcome))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
