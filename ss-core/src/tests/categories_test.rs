use std::collections::HashSet;

use super::*;

fn assert_symbols<T: Vocabulary + std::str::FromStr>(expected: &[&str])
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    let symbols: Vec<_> = T::ALL.iter().map(|v| v.as_str()).collect();
    assert_eq!(symbols, expected);
    for v in T::ALL {
        assert_eq!(v.as_str().parse::<T>().unwrap(), *v);
        assert_eq!(v.to_string(), v.as_str());
    }
}

#[rstest]
fn test_vocabularies_match_exported_symbols() {
    assert_symbols::<AgeGroup>(&["13-17", "18-24", "25-34", "35-44", "45+"]);
    assert_symbols::<Gender>(&["female", "male", "non_binary"]);
    assert_symbols::<Country>(&["NA", "EU_UK", "LATAM", "ASIA", "AFRICA"]);
    assert_symbols::<Subscription>(&["free", "premium", "family", "student"]);
    assert_symbols::<Platform>(&["ios", "android", "desktop", "web"]);
    assert_symbols::<SkipTendency>(&["low", "medium", "high"]);
    assert_symbols::<Genre>(&["pop", "hiphop", "electronic", "rock", "latin", "classical", "indie", "jazz"]);
    assert_symbols::<TimeOfDay>(&["morning", "afternoon", "evening", "night"]);
    assert_symbols::<DayType>(&["weekday", "weekend"]);
    assert_symbols::<Location>(&["home", "commute", "work", "gym"]);
}

#[rstest]
fn test_column_names_are_distinct_schema_columns() {
    let columns = [
        AgeGroup::COLUMN,
        Gender::COLUMN,
        Country::COLUMN,
        Subscription::COLUMN,
        Platform::COLUMN,
        SkipTendency::COLUMN,
        Genre::COLUMN,
        TimeOfDay::COLUMN,
        DayType::COLUMN,
        Location::COLUMN,
    ];
    assert_eq!(columns.iter().collect::<HashSet<_>>().len(), columns.len());
    for column in columns {
        assert!(EVENT_COLUMNS.contains(&column), "{column} missing from schema");
    }
}

#[rstest]
#[case::wrong_case("LOW")]
#[case::empty("")]
#[case::padded(" low")]
fn test_unknown_symbol(#[case] input: &str) {
    let err = input.parse::<SkipTendency>().unwrap_err();
    assert_eq!(err.column, "skip_tendency");
    assert_eq!(err.value, input);
}
