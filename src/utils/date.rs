use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `today` / `yesterday` or an ISO date.
pub fn parse_date_keyword(s: &str) -> Option<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => today().pred_opt(),
        other => parse_date(other),
    }
}

/// Stored UTC timestamp shown in local time; unparsable input is returned as is.
pub fn local_timestamp(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| ts.to_string())
}
