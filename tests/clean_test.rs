//! End-to-end tests: parse, clean, serialize.

use svgclean::{CleanError, Cleaner, Options, clean_svg, clean_with_options};

const NS: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

#[test]
fn folds_translate_into_rect() {
    let svg = format!(r#"<svg {NS}><rect x="1" y="2" transform="translate(5,3)" /></svg>"#);
    let out = clean_svg(&svg).unwrap();
    assert_eq!(out, format!(r#"<svg {NS}><rect x="6" y="5" /></svg>"#));
}

#[test]
fn leaves_transform_on_unknown_shape() {
    let svg = format!(r#"<svg {NS}><g transform="translate(2,2)" x="1" /></svg>"#);
    let out = clean_svg(&svg).unwrap();
    assert_eq!(
        out,
        format!(r#"<svg {NS}><g transform="translate(2,2)" x="1" /></svg>"#)
    );
}

#[test]
fn cleans_polyline_points() {
    let svg = format!(r#"<svg {NS}><polyline points="1.20,2.00 3.456,4.0" /></svg>"#);
    let out = clean_svg(&svg).unwrap();
    assert!(out.contains(r#"points="1.2,2 3.5,4""#), "got: {out}");
}

#[test]
fn odd_points_count_is_an_error() {
    let svg = format!(r#"<svg {NS}><polyline points="1,2,3" /></svg>"#);
    assert!(matches!(
        clean_svg(&svg),
        Err(CleanError::MalformedPoints { count: 3, .. })
    ));
}

#[test]
fn unparseable_numeric_attribute_is_an_error() {
    let svg = format!(r#"<svg {NS}><rect x="10px" /></svg>"#);
    assert!(matches!(clean_svg(&svg), Err(CleanError::Format { .. })));
}

#[test]
fn stripping_absent_attribute_changes_nothing() {
    let svg = format!(r#"<svg {NS}><rect height="3" width="4" x="1" y="2" /></svg>"#);
    let options = Options {
        strip: vec!["data-test".into()],
        ..Options::default()
    };
    assert_eq!(clean_with_options(&svg, &options).unwrap(), svg);
}

#[test]
fn strips_ids_everywhere() {
    let svg = format!(r#"<svg id="root" {NS}><g id="layer"><rect id="box" x="1" /></g></svg>"#);
    let options = Options {
        strip: vec!["id".into()],
        ..Options::default()
    };
    let out = clean_with_options(&svg, &options).unwrap();
    assert!(!out.contains("id="), "got: {out}");
}

#[test]
fn rounds_at_requested_precision() {
    let svg = format!(r#"<svg {NS}><circle cx="1.25" cy="2.00" r="0.333" /></svg>"#);
    let options = Options {
        precision: 2,
        ..Options::default()
    };
    let out = clean_with_options(&svg, &options).unwrap();
    assert!(out.contains(r#"cx="1.25""#));
    assert!(out.contains(r#"cy="2""#));
    assert!(out.contains(r#"r="0.33""#));
}

#[test]
fn cleaning_is_idempotent() {
    let svg = format!(
        r#"<svg {NS}><rect height="20.04" width="10.55" x="1.23" y="4.56" /><polyline points="1.5,2 3,4" /></svg>"#
    );
    let once = clean_svg(&svg).unwrap();
    let twice = clean_svg(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn malformed_xml_fails_before_cleaning() {
    assert!(clean_svg("<svg><rect x=").is_err());
    assert!(clean_svg("not xml at all").is_err());
}

#[test]
fn preserves_unrelated_content() {
    let svg = format!(
        r##"<svg {NS}><!-- keep me --><text>label &amp; more</text><rect fill="#abc" x="1" /></svg>"##
    );
    let out = clean_svg(&svg).unwrap();
    assert!(out.contains("<!-- keep me -->"));
    assert!(out.contains("label &amp; more"));
    assert!(out.contains(r##"fill="#abc""##));
}

#[test]
fn cleaner_applies_precision_eagerly() {
    let svg = format!(r#"<svg {NS}><rect x="1.27" y="2.50" /></svg>"#);
    let mut cleaner = Cleaner::parse(&svg).unwrap();
    cleaner.set_precision(1).unwrap();
    let out = cleaner.to_svg();
    assert!(out.contains(r#"x="1.3""#));
    assert!(out.contains(r#"y="2.5""#));
}

#[test]
fn cleaner_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.svg");
    let output = dir.path().join("out.svg");

    std::fs::write(
        &input,
        format!(r#"<svg {NS}><rect id="a" transform="translate(5, 3)" x="1.00" y="2.00" /></svg>"#),
    )
    .unwrap();

    let mut cleaner = Cleaner::read_file(&input).unwrap();
    cleaner.set_precision(1).unwrap();
    cleaner.fold_translations().unwrap();
    cleaner.strip_attribute("id");
    cleaner.write_file(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, format!(r#"<svg {NS}><rect x="6" y="5" /></svg>"#));
    // the written file is still well-formed SVG
    Cleaner::parse(&written).unwrap();
}
