use sea_orm::{DbErr, RuntimeErr};
use sqlx::{error::ErrorKind, Error as SqlxError};

pub trait DatabaseError {
    fn constraint_violation(&self) -> bool;
    fn foreign_key_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn constraint_violation(&self) -> bool {
        matches!(
            error_kind(self),
            Some(
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            )
        )
    }

    fn foreign_key_violation(&self) -> bool {
        matches!(error_kind(self), Some(ErrorKind::ForeignKeyViolation))
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

fn error_kind(err: &DbErr) -> Option<ErrorKind> {
    get_database_error(err).map(|db_err| db_err.kind())
}
