//! Plain-text rendering of the course list and notices.

use std::fmt::Write as _;

use client_core::{CourseListView, Notice, NoticeLevel};
use shared::{domain::Course, validation::ValidationErrors};

const HEADERS: [&str; 5] = ["ID", "Name", "Credit", "Category", "Teacher"];

fn row(course: &Course) -> [String; 5] {
    [
        course.id.to_string(),
        course.name.clone(),
        course.credit.to_string(),
        course.category.clone(),
        course.teacher.clone(),
    ]
}

pub fn render_list(view: &CourseListView) -> String {
    let rows: Vec<[String; 5]> = view.items.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }

    let _ = writeln!(
        out,
        "Hiển thị {}-{} trong tổng số {} | Trang {}/{}",
        view.range_start, view.range_end, view.total_filtered, view.current_page, view.total_pages
    );
    if !view.teacher_options.is_empty() {
        let _ = writeln!(out, "Giảng viên: {}", view.teacher_options.join(", "));
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

pub fn render_course(course: &Course) -> String {
    HEADERS
        .iter()
        .zip(row(course))
        .map(|(header, value)| format!("{header}: {value}\n"))
        .collect()
}

pub fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("[ok] {}", notice.message),
        NoticeLevel::Error => format!("[lỗi] {}", notice.message),
    }
}

pub fn render_validation(errors: &ValidationErrors) -> String {
    errors
        .fields
        .iter()
        .map(|error| format!("  {}: {}\n", error.field, error.message))
        .collect()
}
