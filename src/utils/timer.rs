//! Deferred execution for the single-threaded event loop.
//!
//! In the browser, delays are `setTimeout`-backed futures from `gloo-timers`
//! and tasks run on the microtask queue. Natively (tests), the same calls map
//! onto tokio's timer and the current `LocalSet`.

use std::future::Future;

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Spawn a `!Send` task on the current thread.
///
/// Natively, inside a tokio runtime this must be called from within a
/// `tokio::task::LocalSet`. Outside any runtime the task is dropped.
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);

    #[cfg(not(target_arch = "wasm32"))]
    match tokio::runtime::Handle::try_current() {
        Ok(_) => drop(tokio::task::spawn_local(future)),
        Err(_) => {
            log::debug!("no async runtime, deferred task dropped");
            drop(future);
        }
    };
}
