//! Delayed navigation used after a success message.

use leptos_router::NavigateOptions;

/// Wait `delay_ms`, then navigate to `path` (replacing history).
///
/// Outside the browser this is a no-op; SSR never runs submit handlers.
pub fn navigate_after<F>(delay_ms: u32, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, path, navigate);
    }
}
