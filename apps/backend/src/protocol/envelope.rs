use serde::Serialize;

use crate::AppError;

/// Uniform result wrapper: `{success, message, code?, data?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
            data: Some(data),
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.detail().to_string(),
            code: Some(err.code().as_str()),
            data: None,
        }
    }

    pub fn from_result(result: Result<T, AppError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::ok(data, message),
            Err(err) => Self::error(&err),
        }
    }
}
