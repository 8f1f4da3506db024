use super::{dispatch, firmware_project};
use pretty_assertions::assert_eq;

fn write_config(root: &std::path::Path, content: &str) -> String {
    pemheader_test::put_file(root, "pemheader.toml", content)
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn configured_headers() {
    let project = firmware_project(
        Some(pemheader_test::get_certificate()),
        Some(pemheader_test::get_private_key()),
    );
    let config = write_config(
        project.path(),
        r#"
version_requirement = ">=1.0.0"

[defaults]
delimiter = "PEM"

[[headers]]
input = "certs/cert.pem"
output = "src/cert_pem.h"
name = "server_cert"

[[headers]]
input = "certs/key.pem"
output = "src/key_pem.h"
name = "server_key"
storage_marker = ""
"#,
    );

    let (result, stdout) = dispatch(&["", "--config", &config], project.path());
    result.unwrap();

    assert_eq!(
        stdout,
        "Converted certs/cert.pem to src/cert_pem.h\n\
         Converted certs/key.pem to src/key_pem.h\n\
         Certificate conversion complete!\n"
    );
    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert_pem.h")).unwrap(),
        format!(
            "const char server_cert[] PROGMEM = R\"PEM(\n{})PEM\";\n",
            pemheader_test::get_certificate()
        )
    );
    assert_eq!(
        std::fs::read_to_string(project.path().join("src/key_pem.h")).unwrap(),
        format!(
            "const char server_key[] = R\"PEM(\n{})PEM\";\n",
            pemheader_test::get_private_key()
        )
    );
}

#[test]
fn no_headers() {
    let project = firmware_project(None, None);
    let config = write_config(project.path(), r#"version_requirement = "*""#);

    let (result, stdout) = dispatch(&["", "-c", &config], project.path());
    result.unwrap();

    assert_eq!(stdout, "Certificate conversion complete!\n");
}

#[test]
fn missing_config_file() {
    let project = firmware_project(None, None);

    let error = dispatch(&["", "-c", "does-not-exist.toml"], project.path())
        .0
        .unwrap_err();

    assert_eq!(error.to_string(), "Cannot parse the configuration");
    assert!(format!("{error:#}").contains("Cannot read file 'does-not-exist.toml'"));
}

#[test]
fn invalid_config_file() {
    let project = firmware_project(None, None);
    let config = write_config(project.path(), "version_requirement = 42");

    let error = dispatch(&["", "-c", &config], project.path())
        .0
        .unwrap_err();

    assert!(format!("{error:#}").contains("File contains format error"));
}

#[test]
fn config_show() {
    let project = firmware_project(None, None);

    let (result, stdout) = dispatch(&["", "config-show"], project.path());
    result.unwrap();

    assert_eq!(
        serde_json::from_str::<pemheader_config::Config>(&stdout).unwrap(),
        pemheader_config::Config::default()
    );
    // nothing is generated
    assert!(!project.path().join("src/cert.h").exists());
}

#[test]
fn config_diff_default() {
    let project = firmware_project(None, None);

    let (result, stdout) = dispatch(&["", "config-diff"], project.path());
    result.unwrap();

    assert!(!stdout.is_empty());
    assert!(stdout.lines().all(|l| l.starts_with(' ')), "{stdout}");
}

#[test]
fn config_diff_changed() {
    let project = firmware_project(None, None);
    let config = write_config(
        project.path(),
        &format!(
            r#"
version_requirement = "{}"

[defaults]
storage_marker = "ICACHE_RODATA_ATTR"

[[headers]]
input = "certs/cert.pem"
output = "src/cert.h"
name = "SSL_CERT"

[[headers]]
input = "certs/key.pem"
output = "src/key.h"
name = "SSL_KEY"
"#,
            env!("CARGO_PKG_VERSION")
        ),
    );

    let (result, stdout) = dispatch(&["", "-c", &config, "config-diff"], project.path());
    result.unwrap();

    let changed = stdout
        .lines()
        .filter(|l| !l.starts_with(' '))
        .collect::<Vec<_>>();
    assert_eq!(
        changed,
        vec![
            "-    \"storage_marker\": \"PROGMEM\",",
            "+    \"storage_marker\": \"ICACHE_RODATA_ATTR\",",
        ]
    );
}
