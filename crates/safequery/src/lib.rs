/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SafeQuery client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the SafeQuery Solana token data API.
//!
//! ```no_run
//! # async fn run() -> safequery::Result<()> {
//! let pool = safequery::get_pool_data("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", None).await?;
//! println!("pool found: {}", pool.pool_found);
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    Config,
    Result,
    SafeQueryClient,
    SafeQueryError,
    get_market_cap,
    get_pool_data,
    get_token_holders,
    get_token_trade_data,
    get_top_traders,
};

// Re-export all types
pub use types::*;
