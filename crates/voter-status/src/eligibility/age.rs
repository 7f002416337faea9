use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `birth` and `reference`.
///
/// The result is only meaningful when `birth <= reference`; earlier reference
/// dates yield zero or negative values.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    let birthday_pending =
        (reference.month(), reference.day()) < (birth.month(), birth.day());
    if birthday_pending {
        age -= 1;
    }
    age
}
