// src/core/calendar.rs
use crate::error::{Error, Result};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: u32) -> bool {
    if year % 4 != 0 { return false; }
    if year % 400 == 0 { return true; }
    year % 100 != 0
}

/// Split a `YYYYMM` period into `(year, month)`.
pub fn split_period(yyyymm: &str) -> Result<(u32, u32)> {
    if yyyymm.len() != 6 || !yyyymm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadPeriod(s!(yyyymm)));
    }
    let year: u32 = yyyymm[..4].parse().map_err(|_| Error::BadPeriod(s!(yyyymm)))?;
    let month: u32 = yyyymm[4..].parse().map_err(|_| Error::BadPeriod(s!(yyyymm)))?;
    if !(1..=12).contains(&month) {
        return Err(Error::BadPeriod(s!(yyyymm)));
    }
    Ok((year, month))
}

/// Number of days in the month given as `YYYYMM`.
pub fn days_in_month(yyyymm: &str) -> Result<u32> {
    let (year, month) = split_period(yyyymm)?;
    let mut n = DAYS_IN_MONTH[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        n += 1;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2012));
        assert!(!is_leap_year(2011));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1700));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month("201101").unwrap(), 31);
        assert_eq!(days_in_month("201102").unwrap(), 28);
        assert_eq!(days_in_month("201202").unwrap(), 29);
        assert_eq!(days_in_month("201204").unwrap(), 30);
        assert_eq!(days_in_month("201212").unwrap(), 31);
    }

    #[test]
    fn rejects_bad_periods() {
        assert!(days_in_month("201213").is_err());
        assert!(days_in_month("201200").is_err());
        assert!(days_in_month("2012").is_err());
        assert!(days_in_month("2012ab").is_err());
    }
}
