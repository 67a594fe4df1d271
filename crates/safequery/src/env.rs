/*
[INPUT]:  Process environment and an optional .env file in the working directory
[OUTPUT]: Environment-supplied defaults for client configuration
[POS]:    Configuration layer - environment lookups
[UPDATE]: When adding new environment variables
*/

use std::env;
use std::env::VarError;
use std::sync::Once;

/// Variable holding the default API base URL
pub const API_URL_VAR: &str = "API_URL";

static DOTENV: Once = Once::new();

/// Load `.env` into the process environment, once. Existing variables win.
fn load_dotenv() {
    DOTENV.call_once(|| {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
    });
}

pub fn api_url_env() -> Result<String, VarError> {
    load_dotenv();
    env::var(API_URL_VAR)
}

/// Non-empty `API_URL`, if set
pub fn api_url() -> Option<String> {
    api_url_env().ok().filter(|url| !url.is_empty())
}
