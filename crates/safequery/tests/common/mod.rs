/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for safequery tests

#![allow(dead_code)]

use safequery::Config;
use serde_json::{Value, json};
use wiremock::{Match, MockServer, Request};

/// USDC mint
pub const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing at the mock server
pub fn mock_config(server: &MockServer) -> Config {
    Config::new().with_base_url(server.uri())
}

/// Matches when the query string holds exactly these pairs, in any order
pub struct ExactQuery(Vec<(String, String)>);

impl ExactQuery {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl Match for ExactQuery {
    fn matches(&self, request: &Request) -> bool {
        let mut actual: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let mut expected = self.0.clone();
        actual.sort();
        expected.sort();
        actual == expected
    }
}

fn usdc() -> Value {
    json!({ "address": MINT, "symbol": "USDC", "name": "USD Coin" })
}

pub fn pool_data_fixture() -> Value {
    json!({
        "token": usdc(),
        "pool": {
            "marketAddress": "market123",
            "baseCurrency": usdc(),
            "quoteCurrency": { "address": "sol123", "symbol": "SOL", "name": "Solana" },
            "dex": { "protocolFamily": "Raydium", "protocolName": "Raydium AMM" },
            "liquidity": {
                "baseAmount": "1000000",
                "quoteAmount": "10000",
                "quoteAmountUsd": "10000"
            }
        },
        "price": 1.0,
        "poolFound": true,
        "timestamp": "2023-01-01T00:00:00Z",
        "queryParams": { "mintAddress": MINT }
    })
}

pub fn market_cap_fixture() -> Value {
    json!({
        "token": usdc(),
        "marketCap": "1000000",
        "tokenSupply": "1000000",
        "timestamp": "2023-01-01T00:00:00Z",
        "queryParams": { "mintAddress": MINT }
    })
}

pub fn token_holders_fixture() -> Value {
    json!({
        "token": { "address": MINT, "name": "USD Coin", "symbol": "USDC", "decimals": 6 },
        "topHolders": [{ "address": "holder1", "balance": "1000", "percentage": "10" }],
        "totalHolders": 100,
        "topCount": 1,
        "totalSupply": "10000",
        "timestamp": "2023-01-01T00:00:00Z",
        "queryParams": { "mintAddress": MINT }
    })
}

pub fn top_traders_fixture() -> Value {
    json!({
        "token": usdc(),
        "traders": [{
            "address": "trader1",
            "bought": "500",
            "sold": "250",
            "volume": "750",
            "volumeUsd": "750",
            "netVolume": "250",
            "profitability": "0.1",
            "dex": {
                "programAddress": "program1",
                "protocolFamily": "Raydium",
                "protocolName": "Raydium AMM"
            }
        }],
        "traderCount": 1,
        "timestamp": "2023-01-01T00:00:00Z",
        "queryParams": { "mintAddress": MINT, "limit": 20 }
    })
}

pub fn token_trade_fixture() -> Value {
    json!({
        "trade": null,
        "tradeFound": false,
        "timestamp": "2023-01-01T00:00:00Z",
        "queryParams": { "mintAddress": MINT }
    })
}
