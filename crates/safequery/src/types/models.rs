/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Nested payload records shared by the response types
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Amounts arrive as strings; these read them as decimals without touching the raw value.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
}

/// Token description that also carries the mint's decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexInfo {
    /// Only reported for traders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_address: Option<String>,
    pub protocol_family: String,
    pub protocol_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidity {
    pub base_amount: String,
    pub quote_amount: String,
    pub quote_amount_usd: String,
}

impl Liquidity {
    pub fn base_amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.base_amount)
    }

    pub fn quote_amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.quote_amount)
    }

    pub fn quote_amount_usd_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.quote_amount_usd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub market_address: String,
    pub base_currency: TokenInfo,
    pub quote_currency: TokenInfo,
    pub dex: DexInfo,
    pub liquidity: Liquidity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    pub address: String,
    pub balance: String,
    pub percentage: String,
}

impl Holder {
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    pub fn percentage_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    pub address: String,
    pub bought: String,
    pub sold: String,
    pub volume: String,
    pub volume_usd: String,
    pub net_volume: String,
    pub profitability: String,
    pub dex: DexInfo,
}

impl Trader {
    pub fn volume_usd_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.volume_usd)
    }

    pub fn net_volume_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.net_volume)
    }

    pub fn profitability_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.profitability)
    }
}

/// Most recent trade for a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub time: String,
    pub price: String,
    pub amount: String,
    pub volume: String,
    pub token: TokenInfo,
}

impl Trade {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }
}

/// Query parameters as echoed back by the server
///
/// Only `mintAddress` is guaranteed. Every other echoed key is kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    pub mint_address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueryEcho {
    /// Echo holding only the mint address
    pub fn new(mint_address: impl Into<String>) -> Self {
        Self {
            mint_address: mint_address.into(),
            extra: Map::new(),
        }
    }

    /// Add an echoed `limit`, as a JSON number
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.extra.insert("limit".to_string(), Value::from(limit));
        self
    }

    /// Echoed `limit`, whether the server sent it as a number or a numeric string
    pub fn limit(&self) -> Option<u32> {
        match self.extra.get("limit")? {
            Value::Number(number) => number.as_u64().and_then(|limit| u32::try_from(limit).ok()),
            Value::String(raw) => raw.trim().parse().ok(),
            _ => None,
        }
    }
}
