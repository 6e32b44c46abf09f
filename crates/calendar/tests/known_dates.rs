use weekday_calendar::{CalendarDate, Weekday, date_sequence, weekday_of};

#[test]
fn epoch_is_monday() {
    assert_eq!(weekday_of(1, 1, 1900).unwrap(), Weekday::Monday);
    assert_eq!(weekday_of(1, 1, 1900).unwrap().name(), "Monday");
}

#[test]
fn spot_checks() {
    let cases: &[(u8, u8, i32, &str)] = &[
        (1, 1, 2000, "Saturday"),
        (29, 2, 2000, "Tuesday"), // leap, divisible by 400
        (31, 12, 1900, "Monday"),
        (1, 3, 1900, "Thursday"), // no Feb 29 in 1900
        (29, 2, 1904, "Monday"),
        (7, 12, 1941, "Sunday"),
        (20, 7, 1969, "Sunday"),
        (31, 12, 1999, "Friday"),
        (11, 9, 2001, "Tuesday"),
        (1, 1, 2023, "Sunday"),
        (29, 2, 2024, "Thursday"),
        (28, 2, 2100, "Sunday"),
        (1, 3, 2100, "Monday"), // 2100 is not leap
        (29, 2, 2400, "Tuesday"),
        (31, 12, 9999, "Friday"),
    ];
    for &(day, month, year, expected) in cases {
        let got = weekday_of(day, month, year).unwrap();
        assert_eq!(
            got.name(),
            expected,
            "weekday_of({day}, {month}, {year}) = {got}, expected {expected}"
        );
    }
}

#[test]
fn numeric_like_inputs_agree_with_integers() {
    let expected = weekday_of(29, 2, 2000).unwrap();
    assert_eq!(weekday_of("29", "2", "2000").unwrap(), expected);
    assert_eq!(weekday_of(" 29", "02 ", "2000").unwrap(), expected);
    assert_eq!(weekday_of(29.0, 2.0, 2000.0).unwrap(), expected);
    assert_eq!(weekday_of(29u8, 2i64, "2.0e3").unwrap(), expected);
    assert_eq!(
        weekday_of(String::from("29"), &String::from("2"), 2000usize).unwrap(),
        expected
    );
}

#[test]
fn periodicity_across_leap_boundaries() {
    // Covers 1900 (non-leap century), 2000 (leap century) and 2100.
    for start_year in [1900, 1999, 2099] {
        let start = CalendarDate::new(1, 1, start_year).unwrap();
        let dates = date_sequence(start, 3 * 366);
        for pair in dates.windows(2) {
            assert_eq!(
                pair[1].weekday(),
                pair[0].weekday().succ(),
                "{} ({}) -> {} ({})",
                pair[0],
                pair[0].weekday(),
                pair[1],
                pair[1].weekday()
            );
        }
    }
}

#[test]
fn same_date_repeats_every_400_years() {
    // 146097 days per 400-year cycle is divisible by 7.
    for (day, month) in [(1u8, 1u8), (29, 2), (1, 3), (31, 12)] {
        let a = weekday_of(day, month, 2000).unwrap();
        let b = weekday_of(day, month, 2400).unwrap();
        assert_eq!(a, b, "{day}/{month}: 2000 gave {a}, 2400 gave {b}");
    }
}

#[test]
fn walking_backwards_uses_pred() {
    let start = CalendarDate::new(1, 3, 2000).unwrap();
    let dates = date_sequence(CalendarDate::new(1, 1, 2000).unwrap(), 61);
    assert_eq!(dates.last(), Some(&start));
    for pair in dates.windows(2).rev() {
        assert_eq!(
            pair[0].weekday(),
            pair[1].weekday().pred(),
            "{} should precede {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn weekday_names_parse_back() {
    for (day, month, year) in [(1u8, 1u8, 1900), (29, 2, 2000), (31, 12, 2099)] {
        let weekday = weekday_of(day, month, year).unwrap();
        let parsed: Weekday = weekday.name().parse().unwrap();
        assert_eq!(parsed, weekday);
        let parsed: Weekday = weekday.to_string().to_uppercase().parse().unwrap();
        assert_eq!(parsed, weekday);
    }
    let err = "Mon".parse::<Weekday>().unwrap_err();
    assert_eq!(err.to_string(), "unknown weekday name: \"Mon\"");
}
