use crate::Result;
use prometheus::{Encoder, TextEncoder};
use tracing::trace;

pub async fn prometheus_handler() -> Result<String> {
    trace!("Received metrics request");

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
