//! # Error Handling
//!
//! Unified error type for the data layer. Database driver errors are
//! classified into conflict and missing-reference variants using SQLSTATE
//! codes so callers can react without matching on driver internals.

use thiserror::Error;

/// Errors surfaced by the repositories and validation layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// A declared constraint on an input field was violated.
    #[error("validation failed for `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The requested record does not exist (within the caller's tenant).
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A unique constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced parent record does not exist.
    #[error("missing or invalid reference: {0}")]
    ForeignKey(String),

    /// Any other database error.
    #[error(transparent)]
    Db(sea_orm::DbErr),
}

impl DataError {
    /// Shorthand for a field validation failure.
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for DataError {
    fn from(err: sea_orm::DbErr) -> Self {
        if is_unique_violation(&err) {
            DataError::Conflict(err.to_string())
        } else if is_foreign_key_violation(&err) {
            DataError::ForeignKey(err.to_string())
        } else {
            DataError::Db(err)
        }
    }
}

fn is_unique_violation(error: &sea_orm::DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_UNIQUE: &str = "23505";
    const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        sea_orm::DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | sea_orm::DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        return code_str == PG_UNIQUE
            || MYSQL_DUPLICATE_CODES.contains(&code_str)
            || SQLITE_DUPLICATE_CODES.contains(&code_str);
    }

    false
}

fn is_foreign_key_violation(error: &sea_orm::DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_FOREIGN_KEY: &str = "23503";
    const MYSQL_FOREIGN_KEY_CODES: &[&str] = &["1216", "1452"];
    const SQLITE_FOREIGN_KEY_CODES: &[&str] = &["787", "1811"];

    let runtime_err = match error {
        sea_orm::DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | sea_orm::DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_foreign_key_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        return code_str == PG_FOREIGN_KEY
            || MYSQL_FOREIGN_KEY_CODES.contains(&code_str)
            || SQLITE_FOREIGN_KEY_CODES.contains(&code_str);
    }

    false
}
