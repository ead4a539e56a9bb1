// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use teller::application::TellerService;

pub const TAX_ID: &str = "12345678900";

/// Timestamp at `hour`:00:00 UTC on the given date.
pub fn at(date: &str, hour: u32) -> DateTime<Utc> {
    let date: NaiveDate = date.parse().unwrap();
    date.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

/// Service with one registered customer owning one freshly opened account.
pub fn service_with_account() -> TellerService {
    let mut service = TellerService::new();
    service
        .create_customer("Ana Souza", "52 Market St", TAX_ID)
        .unwrap();
    service.open_account(TAX_ID).unwrap();
    service
}
