use std::time::Duration;

/// Sleeps on the browser's timer queue.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(d: Duration) {
    gloo_timers::future::sleep(d).await;
}

/// Sleeps on the tokio timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(d: Duration) {
    tokio::time::sleep(d).await;
}

/// Fixed-interval tick source. The first tick fires immediately.
pub struct Ticker {
    period: Duration,
    first: bool,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            first: true,
        }
    }

    pub async fn tick(&mut self) {
        if self.first {
            self.first = false;
            return;
        }
        sleep(self.period).await;
    }
}
