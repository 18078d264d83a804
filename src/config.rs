use std::net::SocketAddr;
use std::str::FromStr;

use ethers::types::Address;

use crate::chain::{self, Chain};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid value `{value}`")]
    Invalid { var: &'static str, value: String },
    #[error("CHAIN: unsupported chain `{0}`")]
    UnknownChain(String),
}

/// Which action set is served on `/api/my-app`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniApp {
    Xp,
    Message,
}

impl FromStr for MiniApp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xp" => Ok(MiniApp::Xp),
            "message" => Ok(MiniApp::Message),
            _ => Err(()),
        }
    }
}

/// Output format of `serializedTransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxEncoding {
    /// Compact JSON of the unsigned record.
    Json,
    /// EIP-155 unsigned legacy RLP, `0x` hex.
    Rlp,
}

impl FromStr for TxEncoding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TxEncoding::Json),
            "rlp" => Ok(TxEncoding::Rlp),
            _ => Err(()),
        }
    }
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub mini_app: MiniApp,
    pub contract_address: Address,
    pub chain: Chain,
    pub tx_encoding: TxEncoding,
    pub default_host: String,
    pub default_protocol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mini_app: MiniApp::Xp,
            contract_address: defaults::contract_address(),
            chain: chain::AVALANCHE_FUJI,
            tx_encoding: TxEncoding::Json,
            default_host: "localhost:3000".to_string(),
            default_protocol: "http".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(v) = var("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", v)?;
        }
        if let Some(v) = var("MINI_APP") {
            config.mini_app = parse("MINI_APP", v)?;
        }
        if let Some(v) = var("CONTRACT_ADDRESS") {
            config.contract_address = parse("CONTRACT_ADDRESS", v)?;
        }
        if let Some(v) = var("CHAIN") {
            config.chain = chain::by_key(v.trim()).ok_or(ConfigError::UnknownChain(v))?;
        }
        if let Some(v) = var("TX_ENCODING") {
            config.tx_encoding = parse("TX_ENCODING", v)?;
        }
        if let Some(v) = var("DEFAULT_HOST") {
            config.default_host = v;
        }
        if let Some(v) = var("DEFAULT_PROTOCOL") {
            config.default_protocol = v;
        }

        Ok(config)
    }
}

// Unset and empty are treated the same.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

mod defaults {
    use ethers::types::{Address, H160};

    const CONTRACT_ADDRESS: [u8; 20] = [
        0x81, 0xae, 0xc0, 0xb8, 0x7c, 0xaa, 0x63, 0x13, 0x65, 0xb0, 0xac, 0x0b, 0x62, 0x8a, 0x84,
        0xaf, 0xdf, 0x6f, 0x1f, 0xe9,
    ];

    pub fn contract_address() -> Address {
        H160(CONTRACT_ADDRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contract_matches_deployment() {
        let expected: Address = "0x81AeC0B87CAa631365B0AC0B628A84afdf6f1Fe9".parse().unwrap();
        assert_eq!(AppConfig::default().contract_address, expected);
    }

    #[test]
    fn parses_enums_case_insensitively() {
        assert_eq!("XP".parse::<MiniApp>(), Ok(MiniApp::Xp));
        assert_eq!(" message ".parse::<MiniApp>(), Ok(MiniApp::Message));
        assert_eq!("Rlp".parse::<TxEncoding>(), Ok(TxEncoding::Rlp));
        assert!("yaml".parse::<TxEncoding>().is_err());
    }

    #[test]
    fn invalid_value_names_the_variable() {
        let err = parse::<SocketAddr>("BIND_ADDR", "nope".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "BIND_ADDR: invalid value `nope`");
    }
}
