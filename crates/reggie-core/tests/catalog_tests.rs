//! Precedence and reload behaviour of the full four-source catalog.

use pretty_assertions::assert_eq;
use reggie_core::{CatalogConfig, Error, MissingPolicy, RegistryCatalog};
use reggie_test_utils::TestHost;
use reggie_test_utils::host::{CRIO_CONF, DAEMON_JSON, DOCKER_SYSCONFIG, REGISTRIES_D};
use rstest::rstest;

fn config(host: &TestHost) -> CatalogConfig {
    CatalogConfig::default().with_root(host.root())
}

fn load(host: &TestHost) -> RegistryCatalog {
    RegistryCatalog::load(&config(host)).unwrap()
}

fn path_string(path: std::path::PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_empty_sources_give_empty_catalog() {
    let host = TestHost::with_empty_sources();
    assert!(load(&host).is_empty());
}

#[test]
fn test_sysconfig_replaces_directory_entry() {
    let host = TestHost::with_empty_sources();
    host.write_registries_d(
        "a.yaml",
        "docker:\n  example.com:\n    sigstore: https://sig.example.com\n    sigstore-staging: file:///staging\n",
    );
    let sysconfig = host.write_sysconfig("INSECURE_REGISTRY=\"example.com\"\n");

    let catalog = load(&host);
    let entry = catalog.get("example.com").unwrap();

    assert_eq!(entry.secure, Some(false));
    assert_eq!(entry.from_file, path_string(sysconfig));
    assert_eq!(entry.sigstore, None);
    assert_eq!(entry.sigstore_staging, None);
}

#[test]
fn test_each_source_overrides_the_previous() {
    let host = TestHost::with_empty_sources();
    let dir_file = host.write_registries_d(
        "default.yaml",
        "docker:\n  r-dir: {}\n  r-sys: {}\n  r-json: {}\n  r-crio: {}\n",
    );
    let sysconfig = host.write_sysconfig("INSECURE_REGISTRY='r-sys r-json r-crio'\n");
    let daemon_json = host.write_daemon_json(r#"{"add-registry": ["r-json", "r-crio"]}"#);
    let crio_conf = host.write_crio_conf("[crio.image]\ninsecure_registries = [\"r-crio\"]\n");

    let catalog = load(&host);
    let origin = |url: &str| catalog.get(url).unwrap().from_file.clone();

    assert_eq!(origin("r-dir"), path_string(dir_file));
    assert_eq!(origin("r-sys"), path_string(sysconfig));
    assert_eq!(origin("r-json"), path_string(daemon_json));
    assert_eq!(origin("r-crio"), path_string(crio_conf));

    assert_eq!(catalog.get("r-dir").unwrap().secure, Some(true));
    assert_eq!(catalog.get("r-sys").unwrap().secure, Some(false));
    assert_eq!(catalog.get("r-json").unwrap().secure, Some(true));
    assert_eq!(catalog.get("r-crio").unwrap().secure, Some(false));
}

#[rstest]
#[case::sysconfig_add("ADD_REGISTRY='--add-registry r1'", "{}", "[crio.image]", true)]
#[case::sysconfig_insecure(
    "INSECURE_REGISTRY='--insecure-registry r1'",
    "{}",
    "[crio.image]",
    false
)]
#[case::daemon_add("", r#"{"add-registry": ["r1"]}"#, "[crio.image]", true)]
#[case::daemon_insecure("", r#"{"insecure-registries": ["r1"]}"#, "[crio.image]", false)]
#[case::daemon_both(
    "",
    r#"{"add-registry": ["r1"], "insecure-registries": ["r1"]}"#,
    "[crio.image]",
    false
)]
#[case::crio_add("", "{}", "[crio.image]\nregistries = [\"r1\"]", true)]
#[case::crio_insecure("", "{}", "[crio.image]\ninsecure_registries = [\"r1\"]", false)]
fn test_secure_flag_per_key(
    #[case] sysconfig: &str,
    #[case] daemon_json: &str,
    #[case] crio_conf: &str,
    #[case] secure: bool,
) {
    let host = TestHost::with_empty_sources();
    host.write_sysconfig(sysconfig);
    host.write_daemon_json(daemon_json);
    host.write_crio_conf(crio_conf);

    let catalog = load(&host);
    assert_eq!(catalog.get("r1").unwrap().secure, Some(secure));
}

#[test]
fn test_directory_file_without_docker_mapping_contributes_nothing() {
    let host = TestHost::with_empty_sources();
    host.write_registries_d("a.yaml", "default-docker:\n  sigstore: https://sig\n");
    host.write_registries_d("b.yaml", "docker:\n  quay.io: {}\n");

    let catalog = load(&host);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("quay.io").is_some());
}

#[test]
fn test_missing_crio_image_fails_reload() {
    let host = TestHost::with_empty_sources();
    host.write_daemon_json(r#"{"add-registry": ["docker.io"]}"#);
    host.write_crio_conf("[crio.runtime]\nconmon = \"/usr/libexec/crio/conmon\"\n");

    let err = RegistryCatalog::load(&config(&host)).unwrap_err();
    assert!(matches!(err, Error::MissingSection { .. }));
}

#[test]
fn test_failed_reload_keeps_earlier_sources() {
    let host = TestHost::with_empty_sources();
    host.write_daemon_json(r#"{"add-registry": ["docker.io"]}"#);
    host.write_crio_conf("");

    let mut catalog = RegistryCatalog::from_config(&config(&host));
    assert!(catalog.reload().is_err());
    assert!(catalog.get("docker.io").is_some());
}

#[test]
fn test_reload_drops_registries_no_longer_mentioned() {
    let host = TestHost::with_empty_sources();
    host.write_daemon_json(r#"{"add-registry": ["old.example.com"]}"#);

    let mut catalog = load(&host);
    assert!(catalog.get("old.example.com").is_some());

    host.write_daemon_json(r#"{"add-registry": ["new.example.com"]}"#);
    catalog.reload().unwrap();

    assert!(catalog.get("old.example.com").is_none());
    assert!(catalog.get("new.example.com").is_some());
}

#[rstest]
#[case(REGISTRIES_D)]
#[case(DOCKER_SYSCONFIG)]
#[case(DAEMON_JSON)]
#[case(CRIO_CONF)]
fn test_missing_source_fails_by_default(#[case] relative: &str) {
    let host = TestHost::with_empty_sources();
    host.remove(relative);

    let err = RegistryCatalog::load(&config(&host)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_skip_policy_tolerates_missing_sources() {
    let host = TestHost::new();
    host.write_daemon_json(r#"{"insecure-registries": ["dev.example.com:5000"]}"#);

    let config = config(&host).with_missing_policy(MissingPolicy::Skip);
    let catalog = RegistryCatalog::load(&config).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("dev.example.com:5000").unwrap().secure, Some(false));
}

#[test]
fn test_skip_policy_still_rejects_malformed_files() {
    let host = TestHost::new();
    host.write_daemon_json("not json");

    let config = config(&host).with_missing_policy(MissingPolicy::Skip);
    let err = RegistryCatalog::load(&config).unwrap_err();
    assert!(!err.is_not_found());
}

#[cfg(unix)]
#[test]
fn test_skip_policy_still_rejects_unreadable_sources() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let host = TestHost::with_empty_sources();
    let daemon_json = host.write_daemon_json(r#"{"add-registry": ["docker.io"]}"#);
    let docker_dir = host.root().join("etc/docker");
    fs::set_permissions(&docker_dir, Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through the mode bits; nothing to check then.
    let readable = fs::read_to_string(&daemon_json).is_ok();
    let result = RegistryCatalog::load(&config(&host).with_missing_policy(MissingPolicy::Skip));
    fs::set_permissions(&docker_dir, Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let err = result.unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, Error::Fs(reggie_fs::Error::Io { .. })));
}

#[test]
fn test_projection_lists_every_registry() {
    let host = TestHost::with_empty_sources();
    host.write_registries_d(
        "a.yaml",
        "docker:\n  registry.example.com:\n    sigstore: s\n    sigstore-staging: ss\n",
    );
    host.write_crio_conf("[crio.image]\nregistries = [\"quay.io\"]\n");

    let projection = load(&host).to_projection();
    let object = projection.as_object().unwrap();

    assert_eq!(
        object.keys().collect::<Vec<_>>(),
        vec!["quay.io", "registry.example.com"]
    );
    assert_eq!(object["registry.example.com"]["sigstore"], "s");
    assert_eq!(object["registry.example.com"]["sigstore_staging"], "ss");
    assert_eq!(object["registry.example.com"]["secure"], true);
    assert!(object["quay.io"]["sigstore"].is_null());
}
