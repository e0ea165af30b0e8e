// Call sites use `crate::log::{debug, trace}` whether or not the `log` feature is enabled.

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace};

#[cfg(not(feature = "log"))]
macro_rules! debug ( ($($tt:tt)*) => {{ let _ = format_args!($($tt)*); }} );
#[cfg(not(feature = "log"))]
macro_rules! trace ( ($($tt:tt)*) => {{ let _ = format_args!($($tt)*); }} );

#[cfg(not(feature = "log"))]
pub(crate) use {debug, trace};
