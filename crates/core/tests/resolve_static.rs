mod common;

use common::MockPackages;
use flagscope_api::ApiError;
use flagscope_core::{FlagResolver, FlagscopeError};
use std::path::Path;
use std::sync::Arc;

fn resolver(packages: Arc<MockPackages>) -> FlagResolver {
    FlagResolver::builder("/proj").with_package_query(packages).build()
}

#[test]
fn test_static_flags_anchor_relative_paths_at_config_dir() {
    let resolver = resolver(Arc::new(MockPackages::gtk_and_vte()));

    let res = resolver.resolve(Path::new("/proj/termite.cc")).unwrap();
    let flags = res.flags.as_slice();

    assert!(res.do_cache);
    assert!(flags.iter().any(|f| f == "-I/usr/include/gtk-3.0"));
    assert!(flags.iter().any(|f| f == "-I/proj/third_party/gtk"));
    assert!(flags.iter().any(|f| f == "-I/usr/include/vte-2.91"));
    assert_eq!(flags.last().map(String::as_str), Some("-I/usr/include/vte-2.91"));
}

#[test]
fn test_static_flags_select_cpp11_once_for_any_file() {
    let resolver = resolver(Arc::new(MockPackages::gtk_and_vte()));

    for file in ["/proj/termite.cc", "/elsewhere/url_regex.hh", "relative.c", ""] {
        let res = resolver.resolve(Path::new(file)).unwrap();
        assert!(res.do_cache);
        assert_eq!(res.flags.count("-std=c++11"), 1, "for {:?}", file);
    }
}

#[test]
fn test_flag_table_is_built_once() {
    let packages = Arc::new(MockPackages::gtk_and_vte());
    let resolver = resolver(packages.clone());

    resolver.resolve(Path::new("/proj/a.cc")).unwrap();
    resolver.resolve(Path::new("/proj/b.cc")).unwrap();

    assert_eq!(packages.calls(), 2, "one query per package, not per file");
}

#[test]
fn test_package_failure_propagates_and_is_retried() {
    let packages = Arc::new(MockPackages::gtk_and_vte());
    packages.fail_on(Some("vte-2.91"));
    let resolver = resolver(packages.clone());

    let err = resolver.resolve(Path::new("/proj/termite.cc")).unwrap_err();
    match err {
        FlagscopeError::Api(ApiError::ProcessInvocation { package, .. }) => {
            assert_eq!(package, "vte-2.91")
        }
        other => panic!("Expected ProcessInvocation, got {:?}", other),
    }

    packages.fail_on(None);
    let res = resolver.resolve(Path::new("/proj/termite.cc")).unwrap();
    assert!(res.flags.contains("-I/usr/include/vte-2.91"));
}

#[test]
fn test_custom_base_flags_and_packages() {
    let resolver = FlagResolver::builder("/proj")
        .with_package_query(Arc::new(MockPackages::gtk_and_vte()))
        .with_base_flags(vec!["-std=c11".to_string(), "-I".to_string(), "include".to_string()])
        .with_packages(vec![])
        .build();

    let res = resolver.resolve(Path::new("/proj/term.c")).unwrap();
    assert_eq!(
        res.flags.into_inner(),
        vec!["-std=c11", "-I", "/proj/include"]
    );
}
