//! The action sets that can be served on `/api/my-app`.

use ethers::types::Bytes;

use crate::chain::Chain;
use crate::config::MiniApp;
use crate::error::ApiError;
use crate::eth::{Contract, ContractError};
use crate::types::Metadata;

pub mod message;
pub mod xp;

pub const PATH: &str = "/api/my-app";

pub fn metadata(app: MiniApp, chain: &Chain, base_url: String) -> Metadata {
    match app {
        MiniApp::Xp => xp::metadata(chain, base_url),
        MiniApp::Message => message::metadata(chain, base_url),
    }
}

pub fn encode_call(
    app: MiniApp,
    contract: &Contract,
    params: &QueryParams,
) -> Result<Bytes, ApiError> {
    match app {
        MiniApp::Xp => xp::encode_call(contract, params),
        MiniApp::Message => message::encode_call(contract, params),
    }
}

/// Loads the ABI that backs `app` at `address`.
pub fn contract(app: MiniApp, address: ethers::types::Address) -> Result<Contract, ContractError> {
    match app {
        MiniApp::Xp => Contract::load(address, xp::ABI, xp::FUNCTION),
        MiniApp::Message => Contract::load(address, message::ABI, message::FUNCTION),
    }
}

/// Query-string pairs in request order.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `name`; empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Values for every name in `names`, or all the ones that are missing.
    pub fn require<const N: usize>(
        &self,
        names: [&'static str; N],
    ) -> Result<[&str; N], ApiError> {
        let missing: Vec<&'static str> = names
            .iter()
            .copied()
            .filter(|n| self.get(n).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::MissingParameters(missing));
        }
        Ok(names.map(|n| self.get(n).unwrap_or_default()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
