/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{
    Holder, PoolInfo, QueryEcho, TokenInfo, TokenMetadata, Trade, Trader, parse_decimal,
};

/// Fields every response carries: the server timestamp and the query echo.
pub trait QueryResponse {
    fn timestamp(&self) -> &str;

    fn query_params(&self) -> &QueryEcho;

    fn mint_address(&self) -> &str {
        &self.query_params().mint_address
    }

    /// `timestamp` as UTC, when it is RFC 3339
    fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp())
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }
}

macro_rules! impl_query_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl QueryResponse for $ty {
                fn timestamp(&self) -> &str {
                    &self.timestamp
                }

                fn query_params(&self) -> &QueryEcho {
                    &self.query_params
                }
            }
        )+
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolResponse {
    pub token: TokenInfo,
    pub pool: Option<PoolInfo>,
    pub price: Option<f64>,
    pub pool_found: bool,
    pub timestamp: String,
    pub query_params: QueryEcho,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapResponse {
    pub token: TokenInfo,
    pub market_cap: String,
    pub token_supply: String,
    pub timestamp: String,
    pub query_params: QueryEcho,
}

impl MarketCapResponse {
    pub fn market_cap_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.market_cap)
    }

    pub fn token_supply_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.token_supply)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldersResponse {
    pub token: TokenMetadata,
    pub top_holders: Vec<Holder>,
    pub total_holders: u64,
    pub top_count: u32,
    pub total_supply: String,
    pub timestamp: String,
    pub query_params: QueryEcho,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTradersResponse {
    pub token: TokenInfo,
    pub traders: Vec<Trader>,
    pub trader_count: u32,
    pub timestamp: String,
    pub query_params: QueryEcho,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub trade: Option<Trade>,
    pub trade_found: bool,
    pub timestamp: String,
    pub query_params: QueryEcho,
}

impl_query_response!(
    PoolResponse,
    MarketCapResponse,
    TokenHoldersResponse,
    TopTradersResponse,
    TradeResponse,
);
