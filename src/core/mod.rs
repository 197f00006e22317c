// src/core/mod.rs

pub mod calendar;
pub mod interpolate;
pub mod sanitize;

pub use calendar::{days_in_month, is_leap_year};
pub use interpolate::interpolate;
pub use sanitize::unquote_plus;
