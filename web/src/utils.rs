use chrono::prelude::*;

/// Board seed from two 32-bit draws of `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let half = || (random() * 4_294_967_296.0) as u32;
    (u64::from(half()) << 32) | u64::from(half())
}

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
