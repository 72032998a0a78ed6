//! Native browser dialogs.
//!
//! SSR paths answer `false` / no-op so server rendering never blocks.

/// `window.confirm`; `false` outside the browser or if the dialog fails.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Run `f` after `millis` in the browser. Used for auto-clearing notices.
pub fn after_delay<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (millis, f);
    }
}
