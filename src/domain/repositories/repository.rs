use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

/// Unique indexes declared in `migration/schemas/account.surql`.
const UNIQUE_INDEXES: [&str; 2] = ["account_id_index", "account_email_index"];

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(surrealdb::Error),
    /// A uniqueness constraint of the store rejected the write.
    #[error("unique constraint violated: {0}")]
    Conflict(String),
}

impl From<surrealdb::Error> for RepositoryError {
    fn from(error: surrealdb::Error) -> Self {
        let detail = error.to_string();

        if is_unique_violation(&detail) {
            return RepositoryError::Conflict(detail);
        }

        RepositoryError::Database(error)
    }
}

// surrealdb 2.x: "Database index `account_email_index` already contains 'a@b.c', with record `account:...`"
fn is_unique_violation(detail: &str) -> bool {
    UNIQUE_INDEXES
        .iter()
        .any(|index| detail.contains(&format!("index `{index}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::email(
        "Database index `account_email_index` already contains 'john.doe@gmail.com', with record `account:abc`",
        true
    )]
    #[case::account_id("Database index `account_id_index` already contains '1', with record `account:abc`", true)]
    #[case::reworded("Unique index `account_email_index` rejected 'john.doe@gmail.com'", true)]
    #[case::other_index("Database index `trip_index` already contains '1', with record `trip:abc`", false)]
    #[case::connection("There was an error processing a remote WS request: connection closed", false)]
    fn test_unique_violation_detection(#[case] detail: &str, #[case] expected: bool) {
        assert_eq!(is_unique_violation(detail), expected);
    }
}
