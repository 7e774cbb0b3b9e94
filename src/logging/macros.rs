//! Call-site capturing macros.
//!
//! Each leveled macro checks the logger's level before doing anything else,
//! so disabled calls evaluate neither their format arguments nor the call
//! site.

/// Build a [`CallSite`](crate::CallSite) for the location where the macro
/// is expanded: `file!()`, `line!()`, and the enclosing function's name.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn here() {}
        $crate::CallSite::new(
            file!(),
            $crate::__function_name(::std::any::type_name_of_val(&here)),
            line!(),
        )
    }};
}

/// Log at an explicit [`LogLevel`](crate::LogLevel) with `format!` syntax.
///
/// ```no_run
/// # let logger = daylog::Logger::builder("/tmp/logs").build().unwrap();
/// daylog::log_at!(logger, daylog::LogLevel::Info, "{} connections", 3);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &$crate::call_site!(), ::std::format_args!($($arg)+));
        }
    }};
}

/// Log at [`LogLevel::Error`](crate::LogLevel::Error).
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at [`LogLevel::Warning`](crate::LogLevel::Warning).
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log at [`LogLevel::Info`](crate::LogLevel::Info).
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log at [`LogLevel::Debug`](crate::LogLevel::Debug).
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log at [`LogLevel::Verbose`](crate::LogLevel::Verbose).
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}
