use std::cmp::Ordering;

use rstest::rstest;
use semver_value::version::compare::{max, min};
use semver_value::version::{FormatError, ParseError};
use semver_value::{FormatLevel, LegacyVersion, Version};

const SAMPLES: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.0",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-a",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.0+build.1",
    "1.0.1",
    "1.10.0",
    "2.0.0-x.7.z.92",
    "2.0.0",
    "10.0.0",
];

fn v(text: &str) -> Version {
    Version::parse(text).unwrap()
}

#[test]
fn precedence_chain_is_strictly_increasing() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    for pair in chain.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn ordering_is_a_total_order_over_samples() {
    let versions: Vec<Version> = SAMPLES.iter().map(|s| v(s)).collect();

    for a in &versions {
        for b in &versions {
            let relations = [a < b, a.compare(b) == Ordering::Equal, a > b];
            assert_eq!(relations.iter().filter(|r| **r).count(), 1, "{a} vs {b}");

            for c in &versions {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn ordering_matches_semver_crate_on_lowercase_input() {
    for a in SAMPLES {
        for b in SAMPLES {
            let ours = v(a).compare(&v(b));
            let theirs = semver::Version::parse(a)
                .unwrap()
                .cmp_precedence(&semver::Version::parse(b).unwrap());
            assert_eq!(ours, theirs, "{a} vs {b}");
        }
    }
}

#[test]
fn general_format_round_trips_through_parse() {
    for text in SAMPLES.iter().chain(&["1.0.0-RC.1+Build.007", "3.2.1+exp.sha.5114f85"]) {
        let version = v(text);
        let rendered = version.format(FormatLevel::GENERAL);

        assert_eq!(rendered, *text);
        let reparsed = v(&rendered);
        assert_eq!(reparsed, version);
        assert_eq!(reparsed.build_metadata(), version.build_metadata());
    }
}

#[test]
fn build_metadata_never_affects_equality_or_order() {
    let x = Version::new(1, 0, 0).with_build_metadata("X");
    let y = Version::new(1, 0, 0).with_build_metadata("Y");

    assert_eq!(x, y);
    assert_eq!(x.compare(&y), Ordering::Equal);
}

#[test]
fn pre_release_is_lower_than_release() {
    assert!(Version::new(1, 0, 0).with_pre_release("alpha") < Version::new(1, 0, 0));
}

#[test]
fn case_only_difference_orders_equal_but_is_not_equal() {
    let upper = v("1.0.0-ALPHA.1");
    let lower = v("1.0.0-alpha.1");

    assert_eq!(upper.compare(&lower), Ordering::Equal);
    assert_ne!(upper, lower);
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("1-beta")]
fn parse_rejects_invalid_text(#[case] input: &str) {
    assert!(Version::parse(input).is_err());
    assert!(Version::try_parse(input).is_none());
}

#[test]
fn parse_rejects_absent_input() {
    assert_eq!(Version::parse_optional(None), Err(ParseError::Missing));
}

#[test]
fn max_and_min_choose_by_precedence() {
    assert_eq!(
        max(Version::new(0, 0, 0), Version::new(1, 0, 0)),
        Version::new(1, 0, 0)
    );
    assert_eq!(
        min(Version::new(0, 0, 0), Version::new(1, 0, 0)),
        Version::new(0, 0, 0)
    );
}

#[test]
fn legacy_version_converts_with_revision_as_build_metadata() {
    let legacy: LegacyVersion = "1.2.3.4".parse().unwrap();

    let version = Version::from_legacy(&legacy);

    assert_eq!(
        version,
        Version::try_from_parts(1, 2, 3, None, Some("4")).unwrap()
    );
    assert_eq!(version.build_metadata(), Some("4"));
}

#[test]
fn level_four_shows_pre_release_or_build_but_never_both() {
    let version = v("1.2.3-rc.1+b5");

    assert_eq!(version.to_string_level(4), Ok("1.2.3-rc.1".to_string()));
    assert_eq!(version.to_string_level(5), Ok("1.2.3-rc.1+b5".to_string()));
    assert_eq!(
        version.to_string_level(6),
        Err(FormatError::LevelOutOfRange(6))
    );
}
