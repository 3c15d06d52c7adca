//! Logging shim: forwards to the `log` crate when the `log` feature is on,
//! expands to nothing otherwise.

#[cfg(feature = "log")]
macro_rules! __debug {
    ($($arg:tt)+) => {
        ::log::debug!(target: "zenpbm", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! __debug {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "log")]
macro_rules! __trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "zenpbm", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! __trace {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}

pub(crate) use {__debug as debug, __trace as trace};
