use std::time::Duration;

/// Wait `delay` on the browser timer queue. A zero delay returns at once
/// without touching timers.
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    gloo_timers::future::sleep(delay).await;
}
