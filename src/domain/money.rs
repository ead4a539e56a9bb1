use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. An operator entering "100" or "100.00" at the menu moves 10000
/// cents.
pub type Cents = i64;

/// Format cents as a human-readable decimal string.
/// Example: 7000 -> "70.00", -250 -> "-2.50"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal string into cents.
/// Example: "100" -> 10000, "30.5" -> 3050, "0.01" -> 1
///
/// At most two fractional digits are kept; extra digits are truncated.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units, fraction) = match body.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (body, ""),
    };
    if units.is_empty() && fraction.is_empty() {
        return Err(ParseCentsError::Empty);
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let fraction = &fraction[..fraction.len().min(2)];
    let fraction_cents: i64 = match fraction.len() {
        0 => 0,
        // A single digit like "5" means 50 cents
        1 => {
            fraction
                .parse::<i64>()
                .map_err(|_| ParseCentsError::InvalidFormat)?
                * 10
        }
        _ => fraction.parse().map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units * 100 + fraction_cents;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("empty amount")]
    Empty,
    #[error("invalid money format")]
    InvalidFormat,
}
