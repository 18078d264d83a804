/// A chain the mini app can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// Key used in the metadata `chains.source` field.
    pub key: &'static str,
    pub id: u64,
    pub name: &'static str,
}

pub const AVALANCHE_FUJI: Chain = Chain {
    key: "fuji",
    id: 43113,
    name: "Avalanche Fuji",
};

pub const AVALANCHE: Chain = Chain {
    key: "avalanche",
    id: 43114,
    name: "Avalanche",
};

pub const CELO: Chain = Chain {
    key: "celo",
    id: 42220,
    name: "Celo",
};

pub const CELO_ALFAJORES: Chain = Chain {
    key: "alfajores",
    id: 44787,
    name: "Celo Alfajores",
};

pub const MONAD_TESTNET: Chain = Chain {
    key: "monad-testnet",
    id: 10143,
    name: "Monad Testnet",
};

pub const SUPPORTED: [Chain; 5] = [
    AVALANCHE_FUJI,
    AVALANCHE,
    CELO,
    CELO_ALFAJORES,
    MONAD_TESTNET,
];

pub fn by_key(key: &str) -> Option<Chain> {
    SUPPORTED.iter().copied().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_fuji() {
        let chain = by_key("fuji").unwrap();
        assert_eq!(chain.id, 43113);
        assert_eq!(chain.name, "Avalanche Fuji");
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(by_key("mainnet").is_none());
        assert!(by_key("Fuji").is_none());
    }
}
