//! Award XP to a player; the contract levels them up and mints a badge.

use ethers::types::Bytes;

use super::{PATH, QueryParams};
use crate::chain::Chain;
use crate::error::ApiError;
use crate::eth::{Contract, coerce};
use crate::types::{Action, ActionChains, ActionKind, Metadata, Param, ParamKind};

pub const ABI: &str = include_str!("../../abi/XpGame.json");
pub const FUNCTION: &str = "addXP";

pub fn metadata(chain: &Chain, base_url: String) -> Metadata {
    Metadata {
        url: "https://sherry.social".to_string(),
        icon: "https://drive.google.com/uc?export=view&id=1S-S6BzeV52cMsWuR6JAOTkKxHRlYuM9K"
            .to_string(),
        title: "Add XP to Player".to_string(),
        base_url,
        description: "Give XP to a player and auto-level them up on-chain".to_string(),
        actions: vec![Action {
            kind: ActionKind::Dynamic,
            label: "Add XP".to_string(),
            description: "Award XP to a player and mint badge on level up".to_string(),
            chains: ActionChains {
                source: chain.key.to_string(),
            },
            path: PATH.to_string(),
            params: vec![
                Param {
                    name: "player".to_string(),
                    label: "Player Address".to_string(),
                    kind: ParamKind::Text,
                    required: true,
                    description: "Wallet address of the player".to_string(),
                },
                Param {
                    name: "xp".to_string(),
                    label: "XP Amount".to_string(),
                    kind: ParamKind::Number,
                    required: true,
                    description: "Amount of XP to award".to_string(),
                },
            ],
        }],
    }
}

pub fn encode_call(contract: &Contract, params: &QueryParams) -> Result<Bytes, ApiError> {
    let [player, xp] = params.require(["player", "xp"])?;

    let player = coerce::parse_address(player)?;
    let xp = coerce::parse_uint(xp)?;

    Ok(contract.encode(FUNCTION, (player, xp))?)
}
