use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Payment {0} not found")]
    NotFound(Uuid),
    #[error("Payment {0} is already recorded")]
    DuplicateId(Uuid),
    #[error("Payment store is full ({capacity} records)")]
    StoreFull { capacity: usize },
    #[error("Bank client error: {0}")]
    BankClient(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
