use fake_useragent::{EXPORTS, Export, UserAgent, resolve};

#[test]
fn exports_list_user_agent_and_both_version_names() {
    for name in ["UserAgent", "VERSION", "version"] {
        assert!(EXPORTS.contains(&name), "{name} missing from EXPORTS");
    }
}

#[test]
fn every_export_resolves() {
    for name in EXPORTS {
        let export = resolve(name).unwrap_or_else(|| panic!("{name} listed but not resolvable"));
        assert_eq!(export.name(), name);
    }
}

#[test]
fn unknown_names_do_not_resolve() {
    assert_eq!(resolve("__all__"), None);
    assert_eq!(resolve("user_agent"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn user_agent_export_is_the_user_agent_type() {
    match resolve("UserAgent") {
        Some(Export::Type { type_name, .. }) => {
            assert_eq!(type_name, std::any::type_name::<UserAgent>());
            assert!(type_name.ends_with("UserAgent"));
        }
        other => panic!("unexpected export: {other:?}"),
    }
}

#[test]
fn user_agent_accessors() {
    let ua = UserAgent::new();

    let chrome = ua.chrome();
    assert!(!chrome.is_empty());
    assert!(chrome.contains("Chrome"));

    let firefox = ua.firefox();
    assert!(!firefox.is_empty());
    assert!(firefox.contains("Firefox"));

    assert!(!ua.random().is_empty());
}

#[test]
fn multiple_user_agents_work_independently() {
    let a = UserAgent::new();
    let b = UserAgent::default();
    assert!(a.chrome().contains("Chrome"));
    assert!(b.chrome().contains("Chrome"));
    assert!(a.firefox().contains("Firefox"));
    assert!(b.firefox().contains("Firefox"));
}

#[test]
fn user_agent_is_usable_across_threads() {
    let ua = UserAgent::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ua = ua.clone();
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| ua.random().to_owned())
                    .all(|s| s.contains("Chrome") || s.contains("Firefox"))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
