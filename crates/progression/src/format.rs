//! Text forms of experience values and progress.

use crate::progress::SkillProgress;

const UNITS: [&str; 4] = ["", "k", "M", "B"];

#[must_use]
/// Short number with one optional decimal and a `k`/`M`/`B` suffix.
///
/// ```rust
/// use progression::format::compact;
///
/// assert_eq!(compact(950.0), "950");
/// assert_eq!(compact(1_260.0), "1.3k");
/// assert_eq!(compact(5_000.0), "5k");
/// assert_eq!(compact(55_172_425.0), "55.2M");
/// ```
pub fn compact(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    if value < 1_000.0 {
        return format!("{}", value.floor());
    }

    let mut scaled = value;
    let mut unit = 0;
    while unit + 1 < UNITS.len() && (scaled * 10.0).round() / 10.0 >= 1_000.0 {
        scaled /= 1_000.0;
        unit += 1;
    }
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{}", UNITS[unit])
}

#[must_use]
/// Whole number with thousands separators.
///
/// ```rust
/// use progression::format::grouped;
///
/// assert_eq!(grouped(0.0), "0");
/// assert_eq!(grouped(1_234_567.9), "1,234,567");
/// ```
pub fn grouped(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let digits = format!("{}", value.floor());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[must_use]
/// `"1.2k/5k"`, or `"MAX"` at the cap.
pub fn short_progress(progress: &SkillProgress) -> String {
    if progress.is_at_cap {
        "MAX".to_string()
    } else {
        format!(
            "{}/{}",
            compact(progress.progress_in_level),
            compact(progress.xp_to_next_level)
        )
    }
}

#[must_use]
/// `"1,234 / 5,000 XP"`, or the total followed by `(MAX)` at the cap.
pub fn long_progress(progress: &SkillProgress) -> String {
    if progress.is_at_cap {
        format!("{} XP (MAX)", grouped(progress.cumulative_xp))
    } else {
        format!(
            "{} / {} XP",
            grouped(progress.progress_in_level),
            grouped(progress.xp_to_next_level)
        )
    }
}
