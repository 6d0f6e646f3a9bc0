use chrono::{DateTime, Local, Utc};
use serde::Serializer;

// pt-BR short form, e.g. "17/10/2026, 14:03:22", rendered in the server's time zone
const LOCALE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

pub fn format_locale_timestamp(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format(LOCALE_TIMESTAMP_FORMAT)
        .to_string()
}

pub fn serialize_locale_timestamp<S>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_locale_timestamp(value))
}
