//! Optional console logging
//!
//! Messages go to `esp-println` when the `esp32-log` feature is enabled and are
//! compiled out otherwise.

#[cfg(feature = "esp32-log")]
macro_rules! log {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use log;
