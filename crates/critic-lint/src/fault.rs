use std::any::Any;

/// A checker panicked while visiting one declaration. The walk skips that
/// call's output and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("checker `{checker}` panicked on `{decl}` in {path}: {message}")]
pub struct CheckerFault {
    pub checker: &'static str,
    pub decl: String,
    pub path: String,
    pub message: String,
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
