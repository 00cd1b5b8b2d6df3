//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates the per-client rate limiter applied to every endpoint.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 2 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Rate
/// limits are keyed by client IP extracted from the socket peer address,
/// so the server must be served with connect info.
///
/// This is pure admission control in front of the link table; the table
/// itself accepts every call that reaches it.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(2)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
