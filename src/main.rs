//! delivery-fee-server
//!
//! Serves the delivery fee API over HTTP.
//!
//! # Environment
//!
//! - `DELIVERY_FEE_ADDR`: bind address (default `0.0.0.0:8000`)
//! - `DELIVERY_FEE_RULES`: path to a YAML rule file (default: built-in rules)
//! - `RUST_LOG`: tracing filter
//!
//! ```bash
//! cargo run --bin delivery-fee-server
//!
//! curl -X POST http://localhost:8000/calculate-delivery-fee \
//!   -H "Content-Type: application/json" \
//!   -d '{"cart_value": 790, "delivery_distance": 2235, "number_of_items": 4, "time": "2024-01-15T13:00:00Z"}'
//! ```

use std::env;
use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delivery_fee_calculator::api::{create_router, AppState};
use delivery_fee_calculator::calculation::FeeCalculator;
use delivery_fee_calculator::config::ConfigLoader;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delivery_fee_server=info,delivery_fee_calculator=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match env::var("DELIVERY_FEE_RULES") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading fee rules");
            ConfigLoader::load(&path)?
        }
        Err(_) => ConfigLoader::default(),
    };
    let calculator = FeeCalculator::new(loader.into_rules())?;

    let address: SocketAddr = env::var("DELIVERY_FEE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(calculator));

    tracing::info!("Starting server on {}", address);
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
