//! Private macro used for error handling.

/// Logs an error, ignores an `Ok` value.
macro_rules! log_if_err {
    ($x:expr) => {
        if let Err(e) = $x {
            crate::error::log_error(&e);
        }
    };
}
