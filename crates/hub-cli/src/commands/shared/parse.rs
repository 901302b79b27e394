use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid {field} '{raw}': expected YYYY-MM-DD"))
}

pub fn parse_opt_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str, field: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .with_context(|| format!("invalid {field} '{raw}': expected HH:MM"))
}

pub fn parse_opt_time(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveTime>> {
    raw.map(|value| parse_time(value, field)).transpose()
}

#[cfg(test)]
mod tests {
    use hub_core::enums::{ContractStatus, EntityKind, LeaveType};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let status: ContractStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, ContractStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: ContractStatus =
            parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, ContractStatus::InProgress);
        let kind: EntityKind = parse_enum("payroll", "kind").expect("kind should parse");
        assert_eq!(kind, EntityKind::Payroll);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<LeaveType>("holiday", "leave type").expect_err("should fail");
        assert!(err.to_string().contains("invalid leave type 'holiday'"));
    }

    #[test]
    fn parses_dates_and_times() {
        assert_eq!(
            parse_date("2026-03-05", "start").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
        assert!(parse_date("05/03/2026", "start").is_err());
        assert_eq!(
            parse_time("17:30", "check-out").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert_eq!(parse_opt_time(None, "check-in").unwrap(), None);
    }
}
