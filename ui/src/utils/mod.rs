//! Cross-cutting helpers
//!
//! - **console_macros**: logging macros that write to the browser console on
//!   WASM and to `tracing` everywhere else

pub mod console_macros;
