//! Application configuration
//!
//! Settings are `clap` argument groups with environment fallbacks; binaries
//! flatten them into their own parsers.

mod logging;
mod pricing;

pub use logging::{LogFormat, LoggingConfig};
pub use pricing::PricingConfig;

/// Load `.env` from the working directory if present.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
