use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}
