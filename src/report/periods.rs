// src/report/periods.rs
use std::collections::BTreeMap;

/// Periods the front-end can display, most recent first.
///
/// Keeps the `YYYYMM` keys (anything not six characters long is
/// ignored) and adds every year that has at least two months.
///
/// `["201201", "201202", "201112"]` → `["201202", "201201", "2012", "201112"]`
pub fn get_periods<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut periods = Vec::new();
    let mut months_per_year: BTreeMap<&str, usize> = BTreeMap::new();

    for key in keys {
        if key.len() != 6 || !key.is_char_boundary(4) {
            continue;
        }
        *months_per_year.entry(&key[..4]).or_default() += 1;
        periods.push(s!(key));
    }
    periods.extend(
        months_per_year
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(year, _)| s!(year)),
    );
    periods.sort_unstable_by(|a, b| b.cmp(a));
    periods.dedup();
    periods
}
