use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::config::GatewayConfig;
use payment_gateway::domain::ports::{BankClientRef, PaymentStoreRef};
use payment_gateway::infrastructure::bank_http::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::{AppState, router};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store: PaymentStoreRef = match config.store_capacity {
        Some(limit) => Arc::new(InMemoryPaymentStore::with_capacity_limit(limit)),
        None => Arc::new(InMemoryPaymentStore::new()),
    };
    let bank: BankClientRef =
        Arc::new(HttpBankClient::new(&config.bank_url, config.bank_timeout()).into_diagnostic()?);

    let app = router(AppState::new(bank, store));

    tracing::info!(
        listen = %config.listen,
        bank_url = %config.bank_url,
        "Payment gateway starting"
    );
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .into_diagnostic()?;
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
