use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub url: String,
    pub icon: String,
    pub title: String,
    pub base_url: String,
    pub description: String,
    pub actions: Vec<Action>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: String,
    pub description: String,
    pub chains: ActionChains,
    pub path: String,
    pub params: Vec<Param>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Parameters are collected from the user and the transaction is built server-side.
    Dynamic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionChains {
    pub source: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub required: bool,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Text,
    Number,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    pub serialized_transaction: String,
    /// Human-readable chain name, not the numeric id.
    pub chain_id: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: &'static str,
}
