use chrono::{Datelike, NaiveDate};
use log::debug;

/// Check 3: the first six digits must be a real `YYMMDD` calendar date.
pub struct BirthDateValidator;

impl BirthDateValidator {
    /// Century prefix for a two-digit year.
    ///
    /// A plain string comparison against `"20"`: `"00"`..`"19"` land in the
    /// 2000s and everything else, `"20"` included, in the 1900s. The cutoff is
    /// fixed and does not move with the current date.
    pub fn infer_century(yy: &str) -> &'static str {
        if yy < "20" {
            "20"
        } else {
            "19"
        }
    }

    /// Returns the birth date encoded in `six_digits`, if it is a real date.
    ///
    /// `six_digits` must already be exactly six ASCII digits.
    pub fn birth_date(six_digits: &str) -> Option<NaiveDate> {
        if six_digits.len() != 6 || !six_digits.bytes().all(|b| b.is_ascii_digit()) {
            debug!("birth date fragment has wrong length or characters: {:?}", six_digits);
            return None;
        }

        let (yy, rest) = six_digits.split_at(2);
        let (mm, dd) = rest.split_at(2);

        if !("01"..="12").contains(&mm) {
            debug!("month out of range: {}", mm);
            return None;
        }
        if !("01"..="31").contains(&dd) {
            debug!("day out of range: {}", dd);
            return None;
        }

        let year: i32 = format!("{}{}", Self::infer_century(yy), yy).parse().ok()?;
        let month: u32 = mm.parse().ok()?;
        let day: u32 = dd.parse().ok()?;

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        if date.year() == year && date.month() == month && date.day() == day {
            Some(date)
        } else {
            None
        }
    }

    pub fn is_valid(six_digits: &str) -> bool {
        Self::birth_date(six_digits).is_some()
    }
}
