//! Client-side form schemas for the course, login and register forms.
//!
//! Each `validate_*` function checks every field and reports all failures at
//! once so a form can show its inline messages together.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::domain::{is_known_category, CourseInput, LoginForm, RegisterForm};

const NAME_MIN_CHARS: usize = 4;
const NAME_MAX_CHARS: usize = 100;
const USERNAME_MIN_CHARS: usize = 5;
const PASSWORD_MIN_CHARS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid form: {}", join_fields(.fields))]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// First message reported for `field`, the one a form shows inline.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_course_input(input: &CourseInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name_len = char_len(&input.name);
    if name_len < NAME_MIN_CHARS {
        errors.push("name", "Tên phải dài hơn 3 ký tự");
    } else if name_len > NAME_MAX_CHARS {
        errors.push("name", "Tên không được vượt quá 100 ký tự");
    }

    if !input.credit.is_finite() || input.credit <= 0.0 {
        errors.push("credit", "Số tín chỉ phải > 0");
    }

    if input.category.is_empty() {
        errors.push("category", "Vui lòng chọn chuyên mục");
    } else if !is_known_category(&input.category) {
        errors.push("category", "Chuyên mục không hợp lệ");
    }

    let teacher_len = char_len(&input.teacher);
    if teacher_len < NAME_MIN_CHARS {
        errors.push("teacher", "Tên giảng viên phải dài hơn 3 ký tự");
    } else if teacher_len > NAME_MAX_CHARS {
        errors.push("teacher", "Tên giảng viên không được vượt quá 100 ký tự");
    }

    errors.into_result()
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !is_valid_email(&form.email) {
        errors.push("email", "Email không hợp lệ");
    }
    if char_len(&form.password) < PASSWORD_MIN_CHARS {
        errors.push("password", "Mật khẩu phải dài hơn 6 ký tự");
    }
    errors.into_result()
}

pub fn validate_register(form: &RegisterForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if char_len(&form.username) < USERNAME_MIN_CHARS {
        errors.push("username", "Username phải dài hơn 4 ký tự");
    }
    if !is_valid_email(&form.email) {
        errors.push("email", "Email không hợp lệ");
    }
    if char_len(&form.password) < PASSWORD_MIN_CHARS {
        errors.push("password", "Mật khẩu phải dài hơn 6 ký tự");
    }
    if form.password != form.confirm_password {
        errors.push("confirmPassword", "Mật khẩu xác nhận không khớp");
    }
    errors.into_result()
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_'+\-\.]*)[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Address shape accepted by the login and register forms. The local part may
/// not start with a dot or hold consecutive dots; the domain needs an
/// alphabetic top-level label of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(email)
}
