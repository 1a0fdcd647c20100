use patclass::{
    build_cpc_query, build_uspc_query, BuildError, ClassificationCode, ClassificationMatch,
    ConfigLoadError, CorpusMatch, CorpusMatchError, CpcCode, DocumentKind, MatchState,
    PatclassConfig, Scheme, UspcCode,
};

#[test]
fn empty_cpc_field_aborts_setup() {
    let mut m = ClassificationMatch::new(vec![
        UspcCode::new("705").into(),
        CpcCode::new("H", "04", "", "21").into(),
    ]);

    let err = m.setup().expect_err("sub_class is empty");
    match err {
        CorpusMatchError::Build(BuildError::EmptyField { scheme, field, .. }) => {
            assert_eq!(scheme, Scheme::Cpc);
            assert_eq!(field, "sub_class");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(m.state(), MatchState::Uninitialized);

    m.bind("<PATDOC/>".to_string(), DocumentKind::Grant);
    assert_eq!(m.is_match(), Err(CorpusMatchError::NotSetUp));
}

#[test]
fn whitespace_only_field_is_empty() {
    let err = build_uspc_query(&UspcCode::new("   ")).expect_err("blank main class");
    assert!(matches!(
        err,
        BuildError::EmptyField {
            scheme: Scheme::Uspc,
            field: "main_class",
            ..
        }
    ));
}

#[test]
fn quote_in_field_is_rejected() {
    let err = build_cpc_query(&CpcCode::new("H", "04'", "N", "21")).expect_err("quote");
    assert!(matches!(err, BuildError::QuoteInField { field: "main_class", .. }));
}

#[test]
fn usage_errors_are_reported_not_swallowed() {
    let mut m = ClassificationMatch::new(vec![UspcCode::new("705").into()]);
    let err = m.is_match().expect_err("not set up");
    assert!(err.is_usage_error());
    assert!(err.to_string().contains("setup"));

    m.setup().expect("valid");
    let err = m.is_match().expect_err("nothing bound");
    assert_eq!(err, CorpusMatchError::NoDocumentBound);
    assert!(err.is_usage_error());
}

#[test]
fn build_error_converts_into_corpus_error() {
    let build = build_uspc_query(&UspcCode::new("")).expect_err("empty");
    let wrapped: CorpusMatchError = build.clone().into();
    assert_eq!(wrapped, CorpusMatchError::Build(build));
    assert!(!wrapped.is_usage_error());
}

#[test]
fn failed_setup_leaves_nothing_to_fork() {
    let mut m = ClassificationMatch::new(vec![
        ClassificationCode::from(UspcCode::new("705")),
        ClassificationCode::from(UspcCode::new("")),
    ]);
    assert!(m.setup().is_err());
    assert!(m.patterns().is_none());

    let mut fork = m.fork();
    assert_eq!(fork.state(), MatchState::Uninitialized);
    fork.bind("<PATDOC/>".to_string(), DocumentKind::Grant);
    assert_eq!(fork.is_match(), Err(CorpusMatchError::NotSetUp));
}

#[test]
fn config_errors() {
    assert!(matches!(
        PatclassConfig::from_yaml("version: \"1\"\nwanted: [\n"),
        Err(ConfigLoadError::YamlParse(_))
    ));
    assert!(matches!(
        PatclassConfig::from_yaml("version: \"3\"\nwanted:\n  - scheme: uspc\n    main_class: \"705\"\n"),
        Err(ConfigLoadError::UnsupportedVersion(_))
    ));
    assert!(matches!(
        PatclassConfig::from_yaml("version: \"1\"\nwanted: []\n"),
        Err(ConfigLoadError::Validation(_))
    ));
}
