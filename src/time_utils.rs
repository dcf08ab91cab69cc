use js_sys::Date;
use wasm_bindgen::JsValue;

/// 12-hour wall clock, `h:mm:ss AM`.
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    let suffix = if hours % 24 >= 12 { "PM" } else { "AM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}:{:02} {}", hour, minutes, seconds, suffix)
}

/// Local time of the last successful price fetch, or `--` before the first.
pub fn format_last_updated(timestamp: Option<u64>) -> String {
    match timestamp {
        Some(ts) => {
            let date = Date::new(&JsValue::from_f64(ts as f64));
            format_clock(date.get_hours(), date.get_minutes(), date.get_seconds())
        }
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn clock_wraps_noon_and_midnight() {
        assert_eq!(format_clock(0, 5, 9), "12:05:09 AM");
        assert_eq!(format_clock(12, 0, 0), "12:00:00 PM");
        assert_eq!(format_clock(23, 59, 1), "11:59:01 PM");
    }
}
