use super::{dispatch, firmware_project};
use pretty_assertions::assert_eq;

#[test]
fn default_headers() {
    let project = firmware_project(
        Some(pemheader_test::get_certificate()),
        Some(pemheader_test::get_private_key()),
    );

    let (result, stdout) = dispatch(&[""], project.path());
    result.unwrap();

    assert_eq!(
        stdout,
        "Converted certs/cert.pem to src/cert.h\n\
         Converted certs/key.pem to src/key.h\n\
         Certificate conversion complete!\n"
    );

    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert.h")).unwrap(),
        format!(
            "const char SSL_CERT[] PROGMEM = R\"EOF(\n{})EOF\";\n",
            pemheader_test::get_certificate()
        )
    );
    assert_eq!(
        std::fs::read_to_string(project.path().join("src/key.h")).unwrap(),
        format!(
            "const char SSL_KEY[] PROGMEM = R\"EOF(\n{})EOF\";\n",
            pemheader_test::get_private_key()
        )
    );
}

#[test]
fn tiny_certificate() {
    let project = firmware_project(Some(pemheader_test::get_tiny_certificate()), Some(""));

    dispatch(&[""], project.path()).0.unwrap();

    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert.h")).unwrap(),
        "const char SSL_CERT[] PROGMEM = R\"EOF(\n-----BEGIN CERTIFICATE-----\nABCD\n-----END CERTIFICATE-----\n)EOF\";\n"
    );
}

#[test]
fn rerun_is_byte_identical() {
    let project = firmware_project(
        Some(pemheader_test::get_certificate()),
        Some(pemheader_test::get_private_key()),
    );

    dispatch(&[""], project.path()).0.unwrap();
    let cert = std::fs::read(project.path().join("src/cert.h")).unwrap();
    let key = std::fs::read(project.path().join("src/key.h")).unwrap();

    dispatch(&[""], project.path()).0.unwrap();
    assert_eq!(std::fs::read(project.path().join("src/cert.h")).unwrap(), cert);
    assert_eq!(std::fs::read(project.path().join("src/key.h")).unwrap(), key);
}

#[test]
fn missing_certificate() {
    let project = firmware_project(None, Some(pemheader_test::get_private_key()));

    let (result, stdout) = dispatch(&[""], project.path());

    let error = result.unwrap_err();
    assert_eq!(
        error
            .downcast_ref::<pemheader_common::ConvertError>()
            .unwrap()
            .kind(),
        std::io::ErrorKind::NotFound
    );
    assert_eq!(stdout, "");
    assert!(!project.path().join("src/cert.h").exists());
    // the run stops at the first failure
    assert!(!project.path().join("src/key.h").exists());
}

#[test]
fn missing_key_keeps_certificate_header() {
    let project = firmware_project(Some(pemheader_test::get_certificate()), None);

    let (result, stdout) = dispatch(&[""], project.path());

    assert!(result.is_err());
    assert_eq!(stdout, "Converted certs/cert.pem to src/cert.h\n");
    assert!(project.path().join("src/cert.h").exists());
    assert!(!project.path().join("src/key.h").exists());
}

#[test]
fn missing_output_directory() {
    let project = firmware_project(
        Some(pemheader_test::get_certificate()),
        Some(pemheader_test::get_private_key()),
    );
    std::fs::remove_dir(project.path().join("src")).unwrap();

    let error = dispatch(&[""], project.path()).0.unwrap_err();

    assert!(matches!(
        error.downcast_ref::<pemheader_common::ConvertError>(),
        Some(pemheader_common::ConvertError::Write { .. })
    ));
}

#[test]
fn convert_single_file() {
    let project = firmware_project(Some(pemheader_test::get_tiny_certificate()), None);

    let (result, stdout) = dispatch(
        &[
            "",
            "convert",
            "certs/cert.pem",
            "src/cert_ca.h",
            "ROOT_CA",
            "--no-storage-marker",
            "--delimiter",
            "PEM",
        ],
        project.path(),
    );
    result.unwrap();

    assert_eq!(stdout, "Converted certs/cert.pem to src/cert_ca.h\n");
    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert_ca.h")).unwrap(),
        "const char ROOT_CA[] = R\"PEM(\n-----BEGIN CERTIFICATE-----\nABCD\n-----END CERTIFICATE-----\n)PEM\";\n"
    );
}

#[test]
fn convert_with_storage_marker() {
    let project = firmware_project(Some("abc\n"), None);

    dispatch(
        &[
            "",
            "convert",
            "certs/cert.pem",
            "src/cert.h",
            "SSL_CERT",
            "--storage-marker",
            "ICACHE_RODATA_ATTR",
        ],
        project.path(),
    )
    .0
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert.h")).unwrap(),
        "const char SSL_CERT[] ICACHE_RODATA_ATTR = R\"EOF(\nabc\n)EOF\";\n"
    );
}

#[test]
fn convert_with_empty_storage_marker() {
    let project = firmware_project(Some("abc\n"), None);

    dispatch(
        &[
            "",
            "convert",
            "certs/cert.pem",
            "src/cert.h",
            "SSL_CERT",
            "--storage-marker",
            "",
        ],
        project.path(),
    )
    .0
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(project.path().join("src/cert.h")).unwrap(),
        "const char SSL_CERT[] = R\"EOF(\nabc\n)EOF\";\n"
    );
}

#[test]
fn convert_rejects_multiline_storage_marker() {
    let project = firmware_project(Some("abc\n"), None);

    let error = <pemheader::Args as clap::Parser>::try_parse_from(&[
        "",
        "convert",
        "certs/cert.pem",
        "src/cert.h",
        "SSL_CERT",
        "--storage-marker",
        "PROGMEM\n#error x",
    ])
    .unwrap_err();

    assert!(
        error.to_string().contains("storage marker must fit on one line"),
        "{error}"
    );
    assert!(!project.path().join("src/cert.h").exists());
}
