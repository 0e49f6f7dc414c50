use crate::models::Currency;

/// Convert an amount between currencies through the INR base.
///
/// `amount / rate(from)` recovers the INR value, which is then scaled by
/// the target rate. Repeated conversions are not required to round-trip
/// exactly; display rounding happens at formatting time only.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    let inr_amount = amount / from.rate();
    inr_amount * to.rate()
}

/// Render an INR amount in the given display currency, two decimal
/// places, prefixed with the currency's symbol.
pub fn format_price(amount: f64, currency: Currency) -> String {
    let converted = convert(amount, Currency::Inr, currency);
    format!("{}{:.2}", currency.symbol(), converted)
}
