/// Macros for properly formatted console logging
/// These macros wrap gloo_console functions and prefix every line with the
/// browser timestamp. Off the wasm32 target (unit tests, tooling) there is no
/// browser console, so the same call sites are routed to `tracing` instead.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!($fmt, $($arg)*);
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!($fmt, $($arg)*);
    }};
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!($fmt, $($arg)*);
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), $fmt));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", $fmt);
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!($fmt, $($arg)*);
    }};
}
