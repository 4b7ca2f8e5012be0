//! Login and registration forms. Input is validated but no backend exists
//! yet, so a valid form is accepted locally.

use shared::{
    domain::{LoginForm, RegisterForm},
    validation::{validate_login, validate_register, ValidationErrors},
};
use tracing::info;

use crate::notice::Notice;

pub fn login(form: &LoginForm) -> Result<Notice, ValidationErrors> {
    validate_login(form)?;
    info!(email = %form.email, "auth: login accepted locally");
    Ok(Notice::success("Đăng nhập thành công"))
}

pub fn register(form: &RegisterForm) -> Result<Notice, ValidationErrors> {
    validate_register(form)?;
    info!(
        username = %form.username,
        email = %form.email,
        "auth: registration accepted locally"
    );
    Ok(Notice::success("Đăng ký thành công"))
}
