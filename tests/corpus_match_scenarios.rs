use matcher::demo_utils::{cpc_document, patdoc, uspc_document};
use patclass::{
    ClassificationCode, ClassificationMatch, CorpusMatch, CpcCode, DocumentKind, Explanation,
    FieldLocation, PatclassConfig, UspcCode,
};

fn set_up(wanted: Vec<ClassificationCode>) -> ClassificationMatch {
    let mut m = ClassificationMatch::new(wanted);
    m.setup().expect("wanted codes compile");
    m
}

fn check(m: &mut ClassificationMatch, document: String) -> bool {
    m.bind(document, DocumentKind::Grant);
    m.is_match().expect("set up and bound")
}

#[test]
fn cpc_primary_and_secondary_locations() {
    let mut m = set_up(vec![CpcCode::new("H", "04", "N", "21").into()]);

    assert!(check(&mut m, cpc_document(Some("H04N2100"), None)));
    assert_eq!(
        m.explain().to_string(),
        "/PATDOC/SDOBI/B500/B510/B511[starts-with(PDAT, 'H04N21')]"
    );

    assert!(check(&mut m, cpc_document(None, Some("H04N2199"))));
    assert_eq!(
        m.explain().to_string(),
        "/PATDOC/SDOBI/B500/B510/B516[starts-with(PDAT, 'H04N21')]"
    );

    assert!(!check(&mut m, cpc_document(Some("H05N2100"), None)));
    assert_eq!(m.explain(), Explanation::NoMatch);
}

#[test]
fn uspc_main_class_prefix() {
    let mut m = set_up(vec![UspcCode::new("705").into()]);
    assert!(check(&mut m, uspc_document(Some("705123"), None)));
    assert!(!check(&mut m, uspc_document(Some("706000"), None)));
}

#[test]
fn first_wanted_code_in_compile_order_explains_the_match() {
    // USPC listed first, but CPC queries are compiled and tried first.
    let mut m = set_up(vec![
        UspcCode::new("705").into(),
        CpcCode::new("G", "06", "Q", "30").into(),
    ]);
    assert!(check(
        &mut m,
        patdoc(Some("G06Q3002"), None, Some("705001"), None)
    ));
    match m.explain() {
        Explanation::Matched { code, location, .. } => {
            assert_eq!(
                code,
                ClassificationCode::from(CpcCode::new("G", "06", "Q", "30"))
            );
            assert_eq!(location, FieldLocation::Primary);
        }
        Explanation::NoMatch => panic!("expected a match"),
    }
}

#[test]
fn applications_use_the_same_locations() {
    let mut m = set_up(vec![UspcCode::new("705").into()]);
    m.bind(uspc_document(None, Some("705010")), DocumentKind::Application);
    assert!(m.is_match().expect("bound"));
}

#[test]
fn documents_without_classification_blocks_never_match() {
    let mut m = set_up(vec![
        CpcCode::new("H", "04", "N", "21").into(),
        UspcCode::new("705").into(),
    ]);
    assert!(!check(&mut m, patdoc(None, None, None, None)));
    assert!(!check(&mut m, "<PATDOC></PATDOC>".to_string()));
    assert!(!check(&mut m, String::new()));
}

#[test]
fn config_driven_matcher() {
    let config = PatclassConfig::from_yaml(
        r#"
version: "1.0"
name: "commerce"
wanted:
  - scheme: uspc
    main_class: "705"
  - scheme: cpc
    section: "G"
    main_class: "06"
    sub_class: "Q"
    main_group: "30"
"#,
    )
    .expect("valid config");

    let mut m = ClassificationMatch::from_config(&config);
    m.setup().expect("valid codes");
    assert_eq!(m.patterns().map(|p| p.len()), Some(2));
    assert!(check(&mut m, cpc_document(None, Some("G06Q3099"))));
}

#[test]
fn explanation_json_shape() {
    let mut m = set_up(vec![UspcCode::new("705").into()]);
    assert!(check(&mut m, uspc_document(Some("705123"), None)));

    let value = serde_json::to_value(m.explain()).expect("serializes");
    assert_eq!(value["outcome"], "matched");
    assert_eq!(value["location"], "primary");
    assert_eq!(value["value"], "705123");
    assert_eq!(value["code"]["scheme"], "uspc");
    assert_eq!(
        value["expression"],
        "/PATDOC/SDOBI/B500/B520/B521[starts-with(PDAT, '705')]"
    );
}
