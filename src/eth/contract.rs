use ethers::abi::{Abi, Tokenize};
use ethers::contract::BaseContract;
use ethers::types::{Address, Bytes};

use super::EncodeError;

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("malformed ABI: {0}")]
    Abi(#[from] serde_json::Error),
    #[error("ABI has no function `{0}`")]
    MissingFunction(String),
}

/// A deployed contract with its parsed ABI.
#[derive(Debug, Clone)]
pub struct Contract {
    address: Address,
    abi: BaseContract,
}

impl Contract {
    /// Parses `abi_json` and checks that `function` is callable on it.
    pub fn load(address: Address, abi_json: &str, function: &str) -> Result<Self, ContractError> {
        let abi: Abi = serde_json::from_str(abi_json)?;
        if abi.function(function).is_err() {
            return Err(ContractError::MissingFunction(function.to_string()));
        }

        Ok(Self {
            address,
            abi: BaseContract::from(abi),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Selector followed by the ABI-encoded arguments.
    pub fn encode<T: Tokenize>(&self, function: &str, args: T) -> Result<Bytes, EncodeError> {
        Ok(self.abi.encode(function, args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::U256;
    use ethers::utils::id;

    const ABI: &str = include_str!("../../abi/XpGame.json");

    #[test]
    fn encodes_selector_and_arguments() {
        let contract = Contract::load(Address::zero(), ABI, "addXP").unwrap();
        let player = Address::repeat_byte(0xaa);

        let data = contract.encode("addXP", (player, U256::from(50))).unwrap();

        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], &id("addXP(address,uint256)"));
        assert_eq!(&data[16..36], player.as_bytes());
        assert_eq!(data[67], 50);
    }

    #[test]
    fn rejects_abi_without_function() {
        let err = Contract::load(Address::zero(), ABI, "storeMessage").unwrap_err();
        assert!(matches!(err, ContractError::MissingFunction(name) if name == "storeMessage"));
    }

    #[test]
    fn rejects_malformed_abi() {
        assert!(matches!(
            Contract::load(Address::zero(), "{not json", "addXP"),
            Err(ContractError::Abi(_))
        ));
    }
}
