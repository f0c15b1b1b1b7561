extern crate chrono;            // DateTime manipulation


use chrono::DateTime;
use chrono::offset::Utc;



// get date into the format we need
pub fn format_date(
                    time: DateTime::<Utc>
                ) -> String
{
    time.format("%Y-%m-%dT%H:%M:%S.%3f").to_string()
}

// scan time stamped on every reported record
pub fn get_now() -> String {
    format_date(Utc::now())
}
