//! Store a message on-chain, optionally with an amount attached.

use ethers::types::{Bytes, U256};

use super::{PATH, QueryParams};
use crate::chain::Chain;
use crate::error::ApiError;
use crate::eth::{Contract, coerce};
use crate::types::{Action, ActionChains, ActionKind, Metadata, Param, ParamKind};

pub const ABI: &str = include_str!("../../abi/MessageBoard.json");
pub const FUNCTION: &str = "storeMessage";

pub fn metadata(chain: &Chain, base_url: String) -> Metadata {
    Metadata {
        url: "https://sherry.social".to_string(),
        icon: "https://drive.google.com/uc?export=view&id=1S-S6BzeV52cMsWuR6JAOTkKxHRlYuM9K"
            .to_string(),
        title: "Message Board".to_string(),
        base_url,
        description: "Leave a message on-chain for everyone to read".to_string(),
        actions: vec![Action {
            kind: ActionKind::Dynamic,
            label: "Store Message".to_string(),
            description: "Write your message to the board contract".to_string(),
            chains: ActionChains {
                source: chain.key.to_string(),
            },
            path: PATH.to_string(),
            params: vec![
                Param {
                    name: "message".to_string(),
                    label: "Message".to_string(),
                    kind: ParamKind::Text,
                    required: true,
                    description: "Text to store on-chain".to_string(),
                },
                Param {
                    name: "amount".to_string(),
                    label: "Amount".to_string(),
                    kind: ParamKind::Number,
                    required: false,
                    description: "Optional amount recorded with the message".to_string(),
                },
            ],
        }],
    }
}

pub fn encode_call(contract: &Contract, params: &QueryParams) -> Result<Bytes, ApiError> {
    let [message] = params.require(["message"])?;

    let amount = match params.get("amount") {
        Some(raw) => coerce::parse_uint(raw)?,
        None => U256::zero(),
    };

    Ok(contract.encode(FUNCTION, (message.to_string(), amount))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::{ParamType, Token, decode};
    use ethers::types::Address;

    fn contract() -> Contract {
        Contract::load(Address::zero(), ABI, FUNCTION).unwrap()
    }

    fn args(data: &Bytes) -> Vec<Token> {
        decode(&[ParamType::String, ParamType::Uint(256)], &data[4..]).unwrap()
    }

    #[test]
    fn missing_amount_encodes_zero() {
        let params: QueryParams = [("message", "gm")].into_iter().collect();
        let data = encode_call(&contract(), &params).unwrap();
        assert_eq!(
            args(&data),
            vec![Token::String("gm".into()), Token::Uint(U256::zero())]
        );
    }

    #[test]
    fn amount_is_encoded_when_present() {
        let params: QueryParams = [("message", "gm"), ("amount", "7")].into_iter().collect();
        let data = encode_call(&contract(), &params).unwrap();
        assert_eq!(args(&data)[1], Token::Uint(U256::from(7)));
    }

    #[test]
    fn malformed_amount_is_an_encoding_error() {
        let params: QueryParams = [("message", "gm"), ("amount", "lots")].into_iter().collect();
        assert!(matches!(
            encode_call(&contract(), &params),
            Err(ApiError::Encode(_))
        ));
    }
}
