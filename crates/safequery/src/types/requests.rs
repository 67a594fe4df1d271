/*
[INPUT]:  Caller-supplied lookup keys and limits
[OUTPUT]: Query-string records serialized onto GET requests
[POS]:    Data layer - request parameter definitions
[UPDATE]: When an endpoint gains or loses a query parameter
*/

use serde::Serialize;

/// Holders returned when the caller gives no limit
pub const DEFAULT_HOLDERS_LIMIT: u32 = 100;

/// Traders returned when the caller gives no limit
pub const DEFAULT_TRADERS_LIMIT: u32 = 20;

/// `?mintAddress=...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintQuery<'a> {
    pub mint_address: &'a str,
}

/// `?mintAddress=...&limit=...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedMintQuery<'a> {
    pub mint_address: &'a str,
    pub limit: u32,
}

impl<'a> LimitedMintQuery<'a> {
    pub fn new(mint_address: &'a str, limit: Option<u32>, default_limit: u32) -> Self {
        Self {
            mint_address,
            limit: limit.unwrap_or(default_limit),
        }
    }
}
