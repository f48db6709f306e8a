use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// ISO date string (YYYY-MM-DD), used in listings and export filenames.
pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
