// Logging shims. With the `tracing` feature these forward to `tracing` under the
// `recycler` target; without it they expand to nothing and their arguments are not evaluated.

#[cfg(feature = "tracing")]
macro_rules! log_at {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "recycler", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_at {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! rtrace {
    ($($tt:tt)*) => {
        log_at!(trace, $($tt)*)
    };
}

macro_rules! rdebug {
    ($($tt:tt)*) => {
        log_at!(debug, $($tt)*)
    };
}

macro_rules! rwarn {
    ($($tt:tt)*) => {
        log_at!(warn, $($tt)*)
    };
}
