use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Bytes, TransactionRequest};
use ethers::utils::to_checksum;
use serde::Serialize;

use super::EncodeError;
use crate::config::TxEncoding;

/// Legacy transaction left for the wallet to complete: no nonce, gas or value.
#[derive(Debug, Clone)]
pub struct UnsignedTx {
    pub to: Address,
    pub data: Bytes,
    pub chain_id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTx {
    to: String,
    data: String,
    chain_id: u64,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl UnsignedTx {
    pub fn serialize(&self, encoding: TxEncoding) -> Result<String, EncodeError> {
        match encoding {
            TxEncoding::Json => self.to_json(),
            TxEncoding::Rlp => Ok(self.to_rlp()),
        }
    }

    fn to_json(&self) -> Result<String, EncodeError> {
        let tx = JsonTx {
            to: to_checksum(&self.to, None),
            data: format!("0x{}", hex::encode(&self.data)),
            chain_id: self.chain_id,
            kind: "legacy",
        };
        Ok(serde_json::to_string(&tx)?)
    }

    fn to_rlp(&self) -> String {
        let request = TransactionRequest::new()
            .to(self.to)
            .data(self.data.clone())
            .chain_id(self.chain_id);
        let rlp = TypedTransaction::Legacy(request).rlp();
        format!("0x{}", hex::encode(&rlp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::utils::rlp::Rlp;

    fn sample() -> UnsignedTx {
        UnsignedTx {
            to: "0x81AeC0B87CAa631365B0AC0B628A84afdf6f1Fe9".parse().unwrap(),
            data: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
            chain_id: 43113,
        }
    }

    #[test]
    fn json_form_is_compact_legacy_record() {
        let out = sample().serialize(TxEncoding::Json).unwrap();
        assert_eq!(
            out,
            r#"{"to":"0x81AeC0B87CAa631365B0AC0B628A84afdf6f1Fe9","data":"0xdeadbeef","chainId":43113,"type":"legacy"}"#
        );
    }

    #[test]
    fn rlp_form_is_eip155_signing_payload() {
        let out = sample().serialize(TxEncoding::Rlp).unwrap();
        let raw = hex::decode(out.strip_prefix("0x").unwrap()).unwrap();
        let rlp = Rlp::new(&raw);

        assert_eq!(rlp.item_count().unwrap(), 9);
        assert_eq!(rlp.val_at::<Vec<u8>>(5).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(rlp.val_at::<u64>(6).unwrap(), 43113);
    }
}
