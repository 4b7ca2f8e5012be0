//! Transient user-facing notifications (toasts) and their error wording.

use crate::error::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeContext {
    Load,
    Detail,
    Delete,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn from_repository_error(context: NoticeContext, err: &RepositoryError) -> Self {
        let prefix = match context {
            NoticeContext::Load => "Không tải được danh sách",
            NoticeContext::Detail => "Không tải được khóa học",
            NoticeContext::Delete => "Xóa thất bại",
            NoticeContext::Submit => "Thất bại",
        };
        let detail = match err {
            RepositoryError::Network(_) => {
                "không kết nối được máy chủ; kiểm tra địa chỉ API và thử lại".to_string()
            }
            RepositoryError::Validation(message) => message.clone(),
            RepositoryError::NotFound(id) => format!("không tìm thấy mục {id}"),
        };
        Self::error(format!("{prefix}: {detail}"))
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Pending notices owned by one screen, drained by whatever renders them.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        if notice.is_error() {
            tracing::warn!(message = %notice.message, "notice: error shown");
        } else {
            tracing::debug!(message = %notice.message, "notice: success shown");
        }
        self.pending.push(notice);
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
