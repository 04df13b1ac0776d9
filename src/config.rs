use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime settings for the gateway. Every flag can also be set from the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Payment gateway in front of an acquiring bank", long_about = None)]
pub struct GatewayConfig {
    /// Base URL of the acquiring bank; payments are posted to `<url>/payments`
    #[arg(long, env = "BANK_BASE_URL", default_value = "http://localhost:8080")]
    pub bank_url: String,

    /// Seconds to wait for the bank before treating the call as declined
    #[arg(long, env = "BANK_TIMEOUT_SECS", default_value_t = 10)]
    pub bank_timeout_secs: u64,

    /// Address the HTTP interface listens on
    #[arg(long, env = "GATEWAY_LISTEN", default_value = "0.0.0.0:8090")]
    pub listen: SocketAddr,

    /// Maximum number of payments kept in memory (unbounded if unset)
    #[arg(long, env = "GATEWAY_STORE_CAPACITY")]
    pub store_capacity: Option<usize>,
}

impl GatewayConfig {
    pub fn bank_timeout(&self) -> Duration {
        Duration::from_secs(self.bank_timeout_secs)
    }
}
