use fake_useragent::{Export, VERSION, resolve, utils::info, version};

#[test]
fn version_is_0_1_6() {
    assert_eq!(VERSION, "0.1.6");
    assert_eq!(version(), "0.1.6");
}

#[test]
fn version_names_never_diverge() {
    for _ in 0..10 {
        assert_eq!(VERSION, version());
    }
    // independent import paths resolve to the same value
    assert_eq!(fake_useragent::VERSION, fake_useragent_utils::info::VERSION);
    assert_eq!(fake_useragent::version(), fake_useragent_utils::info::version());
}

#[test]
fn version_matches_dotted_numeric_prefix() {
    assert!(info::is_dotted_numeric_prefix(VERSION));
    let mut parts = VERSION.split('.');
    for _ in 0..2 {
        let part = parts.next().unwrap();
        assert!(!part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn version_exports_resolve_to_the_same_value() {
    let values: Vec<_> = ["VERSION", "version"]
        .into_iter()
        .map(|name| match resolve(name) {
            Some(Export::Version { value, .. }) => value,
            other => panic!("unexpected export for {name}: {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![VERSION, VERSION]);
}
