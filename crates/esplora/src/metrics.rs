//! Prometheus metrics for the Esplora client.

use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

const RESPONSE_TIME_BUCKETS: &[f64; 14] =
    &[0.005, 0.01, 0.02, 0.05, 0.08, 0.1, 0.2, 0.5, 0.8, 1.0, 2.0, 5.0, 10.0, 30.0];

lazy_static! {
    /// Tracks the number of Esplora requests per method.
    pub static ref PROVIDER_CALLS: CounterVec = register_counter_vec!(
        "spv_esplora_calls",
        "Number of Esplora requests",
        &["provider", "method"]
    ).expect("Provider Calls failed to register");

    /// Tracks failed Esplora requests per method and failure kind.
    pub static ref PROVIDER_ERRORS: CounterVec = register_counter_vec!(
        "spv_esplora_errors",
        "Number of failed Esplora requests",
        &["provider", "method", "error"]
    ).expect("Provider Errors failed to register");

    /// Tracks the response time of Esplora requests.
    pub static ref PROVIDER_RESPONSE_TIME: HistogramVec = register_histogram_vec!(
        "spv_esplora_response_time_seconds",
        "Esplora response times",
        &["provider", "method"],
        RESPONSE_TIME_BUCKETS.to_vec()
    )
    .expect("Failed to register histogram vec");
}
