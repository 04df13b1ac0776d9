//! Request well-formedness checks.
//!
//! Every check is a pure function. A request is accepted only if all of them
//! pass; callers learn pass/fail and nothing more.

use super::payment::PaymentRequest;
use chrono::{Datelike, NaiveDate, Utc};

/// Currencies the gateway accepts, compared case-insensitively.
pub const ALLOWED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

const CARD_NUMBER_LENGTH: std::ops::RangeInclusive<usize> = 14..=19;
const CVV_RANGE: std::ops::RangeInclusive<i32> = 100..=9999;

/// Validates `request` against today's date (UTC).
pub fn is_valid_request(request: &PaymentRequest) -> bool {
    is_valid_request_on(request, Utc::now().date_naive())
}

/// Validates `request` as if it were submitted on `today`.
pub fn is_valid_request_on(request: &PaymentRequest, today: NaiveDate) -> bool {
    is_valid_card_number(&request.card_number)
        && is_valid_expiry_month(request.expiry_month)
        && is_expiry_in_future(request.expiry_year, request.expiry_month, today)
        && is_valid_currency(&request.currency)
        && is_valid_amount(request.amount)
        && is_valid_cvv(request.cvv)
}

/// 14 to 19 ASCII digits, nothing else.
pub fn is_valid_card_number(card_number: &str) -> bool {
    CARD_NUMBER_LENGTH.contains(&card_number.len())
        && card_number.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_expiry_month(month: i32) -> bool {
    (1..=12).contains(&month)
}

/// The expiry month must start strictly after the current month.
pub fn is_expiry_in_future(year: i32, month: i32, today: NaiveDate) -> bool {
    let current = (today.year(), today.month() as i32);
    (year, month) > current
}

pub fn is_valid_currency(currency: &str) -> bool {
    currency.len() == 3
        && ALLOWED_CURRENCIES
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(currency))
}

pub fn is_valid_amount(amount: i64) -> bool {
    amount > 0
}

/// Three- and four-digit CVVs.
pub fn is_valid_cvv(cvv: i32) -> bool {
    CVV_RANGE.contains(&cvv)
}
