/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod solana;

pub use error::{NO_RESPONSE_MESSAGE, Result, SafeQueryError, UNKNOWN_MESSAGE};

pub use client::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, SafeQueryClient};
pub use solana::{
    get_market_cap, get_pool_data, get_token_holders, get_token_trade_data, get_top_traders,
};
