#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, i32, i32)| {
    use calendric::calendar::{compose, decompose};
    use calendric::DateTime;

    let (millis, tz, dst) = data;
    assert_eq!(compose(&decompose(millis)), Some(millis));

    if let Ok(dt) = DateTime::from_timestamp_millis_with_offset(millis, tz, dst) {
        let fields = dt.fields().unwrap();
        if let Ok(rebuilt) = DateTime::from_ymd_hms(
            fields.year(),
            fields.month(),
            fields.day(),
            fields.hour(),
            fields.minute(),
            fields.second(),
        ) {
            assert!(rebuilt == dt);
        }
    }
});
