//! Console logging
//!
//! Routes to the browser console on wasm32. Native builds (tests, benches)
//! have no JS host, so the macro only type-checks its arguments there.

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn console_write(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn console_write(_msg: &str) {}

/// `format!`-style logging to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::console_write(&format!($($arg)*))
    };
}
