#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, String, String)| {
    use calendric::format::CLocale;
    use calendric::DateTime;

    let (millis, locale, pattern) = data;
    let dt = DateTime::from_timestamp_millis(millis);
    let _ = dt.format(&CLocale, &locale, &pattern);
});
