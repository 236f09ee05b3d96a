use std::fmt;

/// Errors surfaced by the service layer. The messages are safe to hand to a client;
/// database details are logged where the error is produced and never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericError {
    NotFound(&'static str),
    BadRequest(&'static str),
    UnknownError(&'static str),
}

impl GenericError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::UnknownError(msg) => msg,
        }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::BadRequest(msg) => write!(f, "bad request: {msg}"),
            Self::UnknownError(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GenericError {}

/// Logs a database error and replaces it with a client-safe `UnknownError`.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sea_orm::DbErr) -> GenericError {
    move |e| {
        log::error!("{context}: {e:#?}");
        GenericError::UnknownError(context)
    }
}
