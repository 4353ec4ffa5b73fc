/// Browser console logging for component code.
///
/// Each line is prefixed with the page clock (`Date.now()`) so the order of
/// UI events and delivery callbacks can be read back from the console.
/// These only work in the browser; service code logs through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($fmt:expr) => {
        format!("[{}] {}", js_sys::Date::now(), $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!($crate::__console_line!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        gloo_console::debug!($crate::__console_line!($($arg)*))
    };
}
