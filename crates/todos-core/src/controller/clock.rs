//! Clock
//!
//! Time source for placeholder ids and notice expiry.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Clock {
    /// Resolve after `duration`
    async fn sleep(&self, duration: Duration);

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}
