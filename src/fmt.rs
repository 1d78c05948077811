// Logging shims: `defmt` on the board, `log` on the host, nothing otherwise.

#[cfg(feature = "defmt")]
macro_rules! strip_log {
    (trace, $($arg:expr),*) => { defmt::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { defmt::debug!($($arg),*) };
    (info, $($arg:expr),*) => { defmt::info!($($arg),*) };
    (warn, $($arg:expr),*) => { defmt::warn!($($arg),*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! strip_log {
    (trace, $($arg:expr),*) => { log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { log::debug!($($arg),*) };
    (info, $($arg:expr),*) => { log::info!($($arg),*) };
    (warn, $($arg:expr),*) => { log::warn!($($arg),*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! strip_log {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = &$arg; )* }};
}

macro_rules! strip_trace {
    ($($arg:expr),*) => (strip_log!(trace, $($arg),*));
}

macro_rules! strip_debug {
    ($($arg:expr),*) => (strip_log!(debug, $($arg),*));
}

macro_rules! strip_info {
    ($($arg:expr),*) => (strip_log!(info, $($arg),*));
}

macro_rules! strip_warn {
    ($($arg:expr),*) => (strip_log!(warn, $($arg),*));
}
