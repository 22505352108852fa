use calendric::DateTime;

use std::{path, process};

#[cfg(target_os = "linux")]
fn verify_against_date_command_format(path: &'static str, millis: i64) {
    // every specifier whose output does not depend on the locale
    let required_format = "d%d H%H I%I j%j m%m M%M S%S w%w y%y Y%Y";

    let output = process::Command::new(path)
        .env("LC_ALL", "C")
        .env("TZ", "UTC")
        .arg("-u")
        .arg("-d")
        .arg(format!("@{}", millis.div_euclid(1000)))
        .arg(format!("+{}", required_format))
        .output()
        .unwrap();

    let date_command_str = String::from_utf8(output.stdout).unwrap();

    // `date` numbers weekdays from Sunday = 0
    let date_command_str = match date_command_str.find(" w") {
        Some(i) => {
            let digit = date_command_str.as_bytes()[i + 2] - b'0' + 1;
            format!("{}{}{}", &date_command_str[..i + 2], digit, &date_command_str[i + 3..])
        }
        None => date_command_str,
    };

    let dt = DateTime::from_timestamp_millis(millis);
    let formatted = format!("{}\n", dt.format_default(required_format).unwrap());
    assert_eq!(date_command_str, formatted, "timestamp {}", millis);
}

#[test]
#[cfg(target_os = "linux")]
fn try_verify_against_date_command_format() {
    let date_path = "/usr/bin/date";

    if !path::Path::new(date_path).exists() {
        // date command not found, skipping
        return;
    }

    // every 55 days and 7 hours from 1950 to 2110, so all hours and weekdays show up
    let step = (55 * 24 + 7) * 3_600_000 + 61_000;
    let mut millis = -631_152_000_000; // 1950-01-01
    while millis < 4_417_977_600_000 {
        verify_against_date_command_format(date_path, millis);
        millis += step;
    }
}

#[cfg(target_os = "linux")]
fn verify_against_date_command_names(path: &'static str, millis: i64) {
    let required_format = "a%a A%A b%b B%B";

    let output = process::Command::new(path)
        .env("LC_ALL", "C")
        .arg("-u")
        .arg("-d")
        .arg(format!("@{}", millis.div_euclid(1000)))
        .arg(format!("+{}", required_format))
        .output()
        .unwrap();

    let date_command_str = String::from_utf8(output.stdout).unwrap();
    let dt = DateTime::from_timestamp_millis(millis);
    let formatted = format!("{}\n", dt.format_default(required_format).unwrap());
    assert_eq!(date_command_str, formatted, "timestamp {}", millis);
}

#[test]
#[cfg(target_os = "linux")]
fn try_verify_names_against_date_command() {
    let date_path = "/usr/bin/date";

    if !path::Path::new(date_path).exists() {
        // date command not found, skipping
        return;
    }

    // one day at a time through a leap year, which covers every month and weekday
    let mut millis = 946_728_000_000; // 2000-01-01 12:00:00
    for _ in 0..366 {
        verify_against_date_command_names(date_path, millis);
        millis += 86_400_000;
    }
}
