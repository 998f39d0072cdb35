use thiserror::Error;

use domain::ContactError;
use persistence::PersistenceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Contact {0} disappeared before it could be fetched")]
    ContactMissing(i64),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
