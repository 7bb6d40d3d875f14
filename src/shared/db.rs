use sea_orm::{DbErr, SqlErr};

/// Postgres reports unique index violations as SQLSTATE 23505. Errors that
/// did not come from the driver, such as `DbErr::Custom`, fall back to the
/// error text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}
