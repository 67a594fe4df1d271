/*
[INPUT]:  Solana mint addresses, optional limits and client configuration
[OUTPUT]: Token data (pool, market cap, holders, top traders, latest trade)
[POS]:    HTTP layer - Solana token data endpoints (no auth required)
[UPDATE]: When adding new token endpoints or changing query parameters
*/

use crate::http::{Config, Result, SafeQueryClient};
use crate::types::{
    DEFAULT_HOLDERS_LIMIT, DEFAULT_TRADERS_LIMIT, LimitedMintQuery, MarketCapResponse, MintQuery,
    PoolResponse, TokenHoldersResponse, TopTradersResponse, TradeResponse,
};

pub const POOL_DATA_ENDPOINT: &str = "/solana/pool-data";
pub const MARKET_CAP_ENDPOINT: &str = "/solana/market-cap";
pub const TOKEN_HOLDERS_ENDPOINT: &str = "/solana/token-holders";
pub const TOP_TRADERS_ENDPOINT: &str = "/solana/top-traders";
pub const TOKEN_TRADE_ENDPOINT: &str = "/solana/token-trade";

impl SafeQueryClient {
    /// Query the main liquidity pool of a token
    ///
    /// GET /solana/pool-data?mintAddress={mint_address}
    pub async fn pool_data(&self, mint_address: &str) -> Result<PoolResponse> {
        let query = MintQuery { mint_address };
        self.get(POOL_DATA_ENDPOINT, &query).await
    }

    /// Query market cap and supply
    ///
    /// GET /solana/market-cap?mintAddress={mint_address}
    pub async fn market_cap(&self, mint_address: &str) -> Result<MarketCapResponse> {
        let query = MintQuery { mint_address };
        self.get(MARKET_CAP_ENDPOINT, &query).await
    }

    /// Query the largest holders, 100 unless `limit` says otherwise
    ///
    /// GET /solana/token-holders?mintAddress={mint_address}&limit={limit}
    pub async fn token_holders(
        &self,
        mint_address: &str,
        limit: Option<u32>,
    ) -> Result<TokenHoldersResponse> {
        let query = LimitedMintQuery::new(mint_address, limit, DEFAULT_HOLDERS_LIMIT);
        self.get(TOKEN_HOLDERS_ENDPOINT, &query).await
    }

    /// Query the top traders, 20 unless `limit` says otherwise
    ///
    /// GET /solana/top-traders?mintAddress={mint_address}&limit={limit}
    pub async fn top_traders(
        &self,
        mint_address: &str,
        limit: Option<u32>,
    ) -> Result<TopTradersResponse> {
        let query = LimitedMintQuery::new(mint_address, limit, DEFAULT_TRADERS_LIMIT);
        self.get(TOP_TRADERS_ENDPOINT, &query).await
    }

    /// Query the most recent trade
    ///
    /// GET /solana/token-trade?mintAddress={mint_address}
    pub async fn token_trade_data(&self, mint_address: &str) -> Result<TradeResponse> {
        let query = MintQuery { mint_address };
        self.get(TOKEN_TRADE_ENDPOINT, &query).await
    }
}

// One-shot helpers: each builds a fresh client from `config` and issues a single request.

/// One-shot [`SafeQueryClient::pool_data`]
pub async fn get_pool_data(mint_address: &str, config: Option<&Config>) -> Result<PoolResponse> {
    SafeQueryClient::new(config)?.pool_data(mint_address).await
}

/// One-shot [`SafeQueryClient::market_cap`]
pub async fn get_market_cap(
    mint_address: &str,
    config: Option<&Config>,
) -> Result<MarketCapResponse> {
    SafeQueryClient::new(config)?.market_cap(mint_address).await
}

/// One-shot [`SafeQueryClient::token_holders`]; `limit` defaults to 100
pub async fn get_token_holders(
    mint_address: &str,
    limit: Option<u32>,
    config: Option<&Config>,
) -> Result<TokenHoldersResponse> {
    SafeQueryClient::new(config)?
        .token_holders(mint_address, limit)
        .await
}

/// One-shot [`SafeQueryClient::top_traders`]; `limit` defaults to 20
pub async fn get_top_traders(
    mint_address: &str,
    limit: Option<u32>,
    config: Option<&Config>,
) -> Result<TopTradersResponse> {
    SafeQueryClient::new(config)?
        .top_traders(mint_address, limit)
        .await
}

/// One-shot [`SafeQueryClient::token_trade_data`]
pub async fn get_token_trade_data(
    mint_address: &str,
    config: Option<&Config>,
) -> Result<TradeResponse> {
    SafeQueryClient::new(config)?
        .token_trade_data(mint_address)
        .await
}
