//! Order Engine Binary
//!
//! Starts the storefront order engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `BD_COURIER_TOKEN`: BD Courier API bearer token
//! - `STEADFAST_API_KEY`: Steadfast API key
//! - `STEADFAST_SECRET_KEY`: Steadfast secret key
//! - `ADMIN_TOKENS`: Comma-separated admin bearer tokens
//!
//! ## Optional
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BD_COURIER_URL`: BD Courier base URL (default: <https://api.bdcourier.com>)
//! - `STEADFAST_URL`: Steadfast base URL (default: <https://app.courier.com.bd>)
//! - `SERVICE_TOKEN`: Internal service bearer token for fraud checks
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use order_engine::application::use_cases::{
    AdminCustomersUseCase, AdminOrdersUseCase, CheckFraudUseCase, PlaceOrderUseCase,
    PreviewCouponUseCase, TrackOrderUseCase,
};
use order_engine::infrastructure::auth::StaticTokenIdentity;
use order_engine::infrastructure::courier::{
    BdCourierAdapter, BdCourierConfig, SteadfastAdapter, SteadfastConfig,
};
use order_engine::infrastructure::http::{AppState, create_router};
use order_engine::infrastructure::persistence::{
    InMemoryCatalog, InMemoryCoupons, InMemoryCustomers, InMemoryOrders,
};
use order_engine::infrastructure::tasks::TokioFraudDispatcher;
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default BD Courier base URL.
const DEFAULT_BD_COURIER_URL: &str = "https://api.bdcourier.com";

/// Default Steadfast base URL.
const DEFAULT_STEADFAST_URL: &str = "https://app.courier.com.bd";

/// Parsed configuration from environment variables.
struct EngineConfig {
    http_port: u16,
    bd_courier_url: String,
    bd_courier_token: String,
    steadfast_url: String,
    steadfast_api_key: String,
    steadfast_secret_key: String,
    admin_tokens: Vec<String>,
    service_token: Option<String>,
}

/// Concrete type alias for the fraud check use case.
type ConcreteCheckFraudUseCase =
    CheckFraudUseCase<InMemoryOrders, InMemoryCustomers, BdCourierAdapter, SteadfastAdapter>;

/// Concrete type alias for the background fraud dispatcher.
type ConcreteFraudDispatcher =
    TokioFraudDispatcher<InMemoryOrders, InMemoryCustomers, BdCourierAdapter, SteadfastAdapter>;

/// Concrete type alias for the application state.
type ConcreteAppState = AppState<
    InMemoryCatalog,
    InMemoryCustomers,
    InMemoryCoupons,
    InMemoryOrders,
    BdCourierAdapter,
    SteadfastAdapter,
    StaticTokenIdentity,
    ConcreteFraudDispatcher,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Storefront Order Engine");

    let config = parse_config()?;
    log_config(&config);

    let state = create_app_state(&config)?;
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  POST   /api/v1/create-order");
    tracing::info!("  POST   /api/v1/coupon-preview");
    tracing::info!("  POST   /api/v1/track-order");
    tracing::info!("  POST   /api/v1/fraud-check");
    tracing::info!("  GET    /api/v1/admin/orders");
    tracing::info!("  PATCH  /api/v1/admin/orders");
    tracing::info!("  DELETE /api/v1/admin/orders");
    tracing::info!("  GET    /api/v1/admin/customers");
    tracing::info!("  PATCH  /api/v1/admin/customers");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order engine stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_engine=info"
                    .parse()
                    .expect("static directive 'order_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> anyhow::Result<EngineConfig> {
    let bd_courier_token = std::env::var("BD_COURIER_TOKEN").unwrap_or_default();
    let steadfast_api_key = std::env::var("STEADFAST_API_KEY").unwrap_or_default();
    let steadfast_secret_key = std::env::var("STEADFAST_SECRET_KEY").unwrap_or_default();

    if bd_courier_token.is_empty() {
        anyhow::bail!("BD_COURIER_TOKEN environment variable is required");
    }
    if steadfast_api_key.is_empty() || steadfast_secret_key.is_empty() {
        anyhow::bail!(
            "STEADFAST_API_KEY and STEADFAST_SECRET_KEY environment variables are required"
        );
    }

    let admin_tokens: Vec<String> = std::env::var("ADMIN_TOKENS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if admin_tokens.is_empty() {
        anyhow::bail!("ADMIN_TOKENS environment variable is required");
    }

    let http_port: u16 = std::env::var("HTTP_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_PORT);

    Ok(EngineConfig {
        http_port,
        bd_courier_url: std::env::var("BD_COURIER_URL")
            .unwrap_or_else(|_| DEFAULT_BD_COURIER_URL.to_string()),
        bd_courier_token,
        steadfast_url: std::env::var("STEADFAST_URL")
            .unwrap_or_else(|_| DEFAULT_STEADFAST_URL.to_string()),
        steadfast_api_key,
        steadfast_secret_key,
        admin_tokens,
        service_token: std::env::var("SERVICE_TOKEN").ok(),
    })
}

/// Log the parsed configuration.
fn log_config(config: &EngineConfig) {
    tracing::info!(
        http_port = config.http_port,
        bd_courier_url = %config.bd_courier_url,
        steadfast_url = %config.steadfast_url,
        admin_tokens = config.admin_tokens.len(),
        service_token_configured = config.service_token.is_some(),
        "Configuration loaded"
    );
}

/// Wire repositories, adapters and use cases into the application state.
fn create_app_state(config: &EngineConfig) -> anyhow::Result<ConcreteAppState> {
    let catalog = Arc::new(InMemoryCatalog::new());
    let customers = Arc::new(InMemoryCustomers::new());
    let coupons = Arc::new(InMemoryCoupons::new());
    let orders = Arc::new(InMemoryOrders::new());

    let bd_courier = Arc::new(BdCourierAdapter::new(&BdCourierConfig::new(
        config.bd_courier_url.clone(),
        config.bd_courier_token.clone(),
    ))?);
    let steadfast = Arc::new(SteadfastAdapter::new(&SteadfastConfig::new(
        config.steadfast_url.clone(),
        config.steadfast_api_key.clone(),
        config.steadfast_secret_key.clone(),
    ))?);

    tracing::info!("Courier adapters initialized");

    let check_fraud: Arc<ConcreteCheckFraudUseCase> = Arc::new(CheckFraudUseCase::new(
        Arc::clone(&orders),
        Arc::clone(&customers),
        bd_courier,
        steadfast,
    ));
    let fraud_dispatcher = Arc::new(TokioFraudDispatcher::new(Arc::clone(&check_fraud)));

    let place_order = Arc::new(PlaceOrderUseCase::new(
        Arc::clone(&catalog),
        Arc::clone(&customers),
        Arc::clone(&coupons),
        Arc::clone(&orders),
        fraud_dispatcher,
    ));
    let preview_coupon = Arc::new(PreviewCouponUseCase::new(Arc::clone(&coupons)));
    let track_order = Arc::new(TrackOrderUseCase::new(Arc::clone(&orders)));
    let admin_orders = Arc::new(AdminOrdersUseCase::new(Arc::clone(&orders)));
    let admin_customers = Arc::new(AdminCustomersUseCase::new(
        Arc::clone(&customers),
        Arc::clone(&orders),
    ));

    let identity = Arc::new(StaticTokenIdentity::new(
        config.admin_tokens.clone(),
        config.service_token.clone(),
    ));

    Ok(AppState {
        place_order,
        preview_coupon,
        track_order,
        check_fraud,
        admin_orders,
        admin_customers,
        identity,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install handlers
/// means the process cannot respond to termination signals, so it is better to
/// fail fast during startup than to have an unresponsive process.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
