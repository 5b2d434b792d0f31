//! Internal logging macros.
//!
//! With the `tracing` feature these forward to `tracing`; without it they
//! compile to nothing (the arguments are still type-checked).

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "tracing")]
macro_rules! warning {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warning {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use debug;
pub(crate) use warning;
