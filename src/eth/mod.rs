// Contract call encoding and unsigned transaction serialization.

pub mod coerce;
pub mod contract;
pub mod tx;

pub use contract::{Contract, ContractError};
pub use tx::UnsignedTx;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
    #[error("invalid unsigned integer `{0}`")]
    InvalidNumber(String),
    #[error(transparent)]
    Abi(#[from] ethers::contract::AbiError),
    #[error("failed to serialize transaction: {0}")]
    Json(#[from] serde_json::Error),
}
