use std::time::Duration;

/// Suspend the current task. Browser timers on wasm, tokio elsewhere.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
