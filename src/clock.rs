//! Browser Clock
//!
//! `Clock` backed by `setTimeout` and `Date.now()`.

use std::time::Duration;

use async_trait::async_trait;
use todos_core::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
