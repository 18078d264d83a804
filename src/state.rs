use std::sync::Arc;

use crate::apps;
use crate::config::AppConfig;
use crate::eth::{Contract, ContractError};

/// Read-only per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub contract: Arc<Contract>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ContractError> {
        let contract = apps::contract(config.mini_app, config.contract_address)?;

        Ok(Self {
            config: Arc::new(config),
            contract: Arc::new(contract),
        })
    }
}
