//! Integration tests for the profile lifecycle.

use std::fs;
use std::path::Path;

use pkgdev_profile::{
    is_profile_dir, CreateOptions, ProfileError, ProfileManager, CONFIG_EXAMPLE_FILE,
    DEFAULT_PROFILE, PROFILE_CONFIG_FILE, PROFILE_META_FILE,
};
use tempfile::tempdir;

fn manager(root: &Path) -> ProfileManager {
    ProfileManager::new(root.join("profiles"))
}

#[test]
fn test_create_then_load() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    assert_eq!(dir, manager.root().join("dev"));

    let profile = manager.load("dev").unwrap();
    assert_eq!(profile.name, "dev");
    assert!(profile.path.ends_with("dev"));
    assert!(is_profile_dir(&profile.path).unwrap());
    assert!(profile.join([CONFIG_EXAMPLE_FILE]).exists());
    assert!(!profile.join([PROFILE_CONFIG_FILE]).exists());

    let metadata = profile.metadata().unwrap();
    assert_eq!(metadata.name, "dev");
    assert_eq!(metadata.path, profile.path);
    assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_create_uses_default_name() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::default()).unwrap();
    assert!(dir.ends_with(DEFAULT_PROFILE));
    manager.load(DEFAULT_PROFILE).unwrap();
}

#[test]
fn test_create_with_explicit_root() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());
    let other_root = temp.path().join("elsewhere");

    manager
        .create(CreateOptions::new("dev").root_path(&other_root))
        .unwrap();

    assert!(is_profile_dir(&other_root.join("dev")).unwrap());
    assert!(manager.load("dev").unwrap_err().is_not_a_profile());
}

#[test]
fn test_create_with_empty_root_uses_manager_root() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager
        .create(CreateOptions::new("dev").root_path(""))
        .unwrap();

    assert_eq!(dir, manager.root().join("dev"));
    assert!(dir.is_absolute());
    assert!(manager.load("dev").is_ok());
}

#[test]
fn test_create_reports_failed_resources() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    // A directory where the metadata file goes makes that one resource fail.
    fs::remove_file(dir.join(PROFILE_META_FILE)).unwrap();
    fs::create_dir_all(dir.join(PROFILE_META_FILE)).unwrap();

    let err = manager
        .create(CreateOptions::new("dev").overwrite(true))
        .unwrap_err();

    match err {
        ProfileError::ResourceApplication { ref name, ref source } => {
            assert_eq!(name, "dev");
            let results = source.results();
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].path, Path::new(PROFILE_META_FILE));
            assert!(!results[0].is_ok());
            assert!(results[1].is_ok());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains(PROFILE_META_FILE));

    // The remaining resource was still written.
    assert!(dir.join(CONFIG_EXAMPLE_FILE).is_file());
}

#[test]
fn test_create_twice_requires_overwrite() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.create(CreateOptions::new("dev")).unwrap();

    let err = manager.create(CreateOptions::new("dev")).unwrap_err();
    assert!(matches!(err, ProfileError::AlreadyExists(ref name) if name == "dev"));

    manager
        .create(CreateOptions::new("dev").overwrite(true))
        .unwrap();
}

#[test]
fn test_overwrite_keeps_user_config() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    fs::write(dir.join(PROFILE_CONFIG_FILE), "stack:\n  log_level: debug\n").unwrap();

    manager
        .create(CreateOptions::new("dev").overwrite(true))
        .unwrap();

    let profile = manager.load("dev").unwrap();
    assert_eq!(profile.config("stack.log_level", "info"), "debug");
}

#[test]
fn test_load_plain_directory_is_not_a_profile() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());
    fs::create_dir_all(manager.root().join("plain")).unwrap();

    let err = manager.load("plain").unwrap_err();
    assert!(matches!(err, ProfileError::NotAProfile));
    assert!(manager.load("missing").unwrap_err().is_not_a_profile());
}

#[test]
fn test_load_with_malformed_config_fails() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    fs::write(dir.join(PROFILE_CONFIG_FILE), "stack: [broken\n").unwrap();

    let err = manager.load("dev").unwrap_err();
    assert!(matches!(err, ProfileError::MalformedConfig { .. }));

    // The existence check does not mask the failure as "absent"
    let err = manager.create(CreateOptions::new("dev")).unwrap_err();
    assert!(matches!(err, ProfileError::CheckExisting { .. }));
    assert!(!err.is_not_a_profile());
}

#[test]
fn test_config_fallback_without_config_file() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.create(CreateOptions::new("dev")).unwrap();
    let profile = manager.load("dev").unwrap();

    assert_eq!(profile.config("anything", "fallback"), "fallback");
}

#[test]
fn test_delete_default_is_protected() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let err = manager.delete(DEFAULT_PROFILE).unwrap_err();
    assert!(matches!(err, ProfileError::ProtectedProfile(_)));

    manager.create(CreateOptions::default()).unwrap();
    let err = manager.delete(DEFAULT_PROFILE).unwrap_err();
    assert!(matches!(err, ProfileError::ProtectedProfile(_)));
    assert!(is_profile_dir(&manager.root().join(DEFAULT_PROFILE)).unwrap());
}

#[test]
fn test_delete_is_idempotent() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.delete("nonexistent").unwrap();

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    manager.delete("dev").unwrap();
    assert!(!dir.exists());
    manager.delete("dev").unwrap();
}

#[test]
fn test_delete_rejects_path_names() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());
    fs::create_dir_all(manager.root()).unwrap();

    for name in ["", "..", "../profiles"] {
        let err = manager.delete(name).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidName { .. }), "{name:?}");
    }
    assert!(manager.root().exists());
}

#[test]
fn test_inherited_profile_is_independent() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let a = manager.create(CreateOptions::new("a")).unwrap();
    fs::create_dir_all(a.join("certs")).unwrap();
    fs::write(a.join("certs").join("ca.pem"), "original").unwrap();
    fs::write(a.join(PROFILE_CONFIG_FILE), "stack:\n  log_level: warn\n").unwrap();

    let b = manager
        .create(CreateOptions::new("b").from_profile("a"))
        .unwrap();

    // Copied content
    assert_eq!(fs::read_to_string(b.join("certs/ca.pem")).unwrap(), "original");
    let profile_b = manager.load("b").unwrap();
    assert_eq!(profile_b.config("stack.log_level", "info"), "warn");

    // Re-stamped metadata names the new profile
    assert_eq!(profile_b.metadata().unwrap().name, "b");
    assert_eq!(manager.load("a").unwrap().metadata().unwrap().name, "a");

    // Mutations do not cross over
    fs::write(b.join("certs/ca.pem"), "changed in b").unwrap();
    assert_eq!(fs::read_to_string(a.join("certs/ca.pem")).unwrap(), "original");

    fs::write(a.join(PROFILE_CONFIG_FILE), "stack:\n  log_level: error\n").unwrap();
    assert_eq!(
        manager.load("b").unwrap().config("stack.log_level", "info"),
        "warn"
    );
}

#[test]
fn test_inherit_from_missing_profile_fails() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let err = manager
        .create(CreateOptions::new("b").from_profile("ghost"))
        .unwrap_err();

    assert!(matches!(err, ProfileError::LoadSource { ref name, .. } if name == "ghost"));
    assert!(err.is_not_a_profile());
    assert!(err.to_string().contains("ghost"));
    assert!(!manager.root().join("b").exists());
}

#[test]
fn test_create_from_default_uses_bundled_resources() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let default_dir = manager.create(CreateOptions::default()).unwrap();
    fs::write(
        default_dir.join(PROFILE_CONFIG_FILE),
        "stack:\n  log_level: trace\n",
    )
    .unwrap();
    fs::write(default_dir.join(CONFIG_EXAMPLE_FILE), "# customized\n").unwrap();
    fs::write(default_dir.join("extra.txt"), "custom").unwrap();

    let b = manager
        .create(CreateOptions::new("b").from_profile(DEFAULT_PROFILE))
        .unwrap();

    assert!(!b.join(PROFILE_CONFIG_FILE).exists());
    assert!(!b.join("extra.txt").exists());

    let example = fs::read_to_string(b.join(CONFIG_EXAMPLE_FILE)).unwrap();
    assert!(example.contains("Configuration for the \"b\" profile"));
    assert!(!example.contains("customized"));

    let profile = manager.load("b").unwrap();
    assert_eq!(profile.config("stack.log_level", "info"), "info");
}

#[test]
fn test_list_skips_plain_directories() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.create(CreateOptions::new("dev")).unwrap();
    fs::create_dir_all(manager.root().join("not-a-profile")).unwrap();
    fs::write(manager.root().join("stray-file"), "x").unwrap();

    let profiles = manager.list().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "dev");
}

#[cfg(unix)]
#[test]
fn test_list_skips_directories_with_invalid_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.create(CreateOptions::new("dev")).unwrap();
    fs::create_dir_all(manager.root().join(r"notes\old")).unwrap();
    fs::create_dir_all(manager.root().join(OsStr::from_bytes(b"caf\xe9"))).unwrap();

    let profiles = manager.list().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "dev");
}

#[test]
fn test_list_is_ordered_by_name() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    for name in ["zeta", "alpha", "mid"] {
        manager.create(CreateOptions::new(name)).unwrap();
    }

    let names: Vec<_> = manager.list().unwrap().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_list_missing_root_is_empty() {
    let temp = tempdir().unwrap();
    let profiles = ProfileManager::list_in(&temp.path().join("nope")).unwrap();
    assert!(profiles.is_empty());
}

#[test]
fn test_list_aborts_on_broken_profile() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    manager.create(CreateOptions::new("good")).unwrap();
    let broken = manager.create(CreateOptions::new("broken")).unwrap();
    fs::write(broken.join(PROFILE_CONFIG_FILE), "{not yaml").unwrap();

    let err = manager.list().unwrap_err();
    assert!(matches!(err, ProfileError::Load { ref name, .. } if name == "broken"));
}

#[test]
fn test_list_fails_on_malformed_metadata() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    let dir = manager.create(CreateOptions::new("dev")).unwrap();
    fs::write(dir.join(PROFILE_META_FILE), "not json").unwrap();

    let err = manager.list().unwrap_err();
    assert!(matches!(err, ProfileError::MalformedMetadata { .. }));
}

#[test]
fn test_ensure_default_creates_once() {
    let temp = tempdir().unwrap();
    let manager = manager(temp.path());

    assert!(manager.ensure_default().unwrap());
    let dir = manager.root().join(DEFAULT_PROFILE);
    fs::write(dir.join(PROFILE_CONFIG_FILE), "stack:\n  log_level: debug\n").unwrap();

    assert!(!manager.ensure_default().unwrap());
    assert_eq!(
        manager
            .load(DEFAULT_PROFILE)
            .unwrap()
            .config("stack.log_level", "info"),
        "debug"
    );
}
