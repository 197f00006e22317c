// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! parse_err {
    // Located parse error shorthand: parse_err!(path, line, "fmt", args…)
    ($path:expr, $line:expr, $($arg:tt)+) => {
        $crate::error::Error::parse($path, $line, format!($($arg)+))
    };
}
