//! Integration tests for catalog loading from files
use hsn_validator::catalog::{self, CatalogLoadError};
use tempfile::tempdir;

#[tokio::test]
async fn test_load_delimited_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.csv");
    let content = "\
# HSN excerpt
01,Live animals
0101,Horses
0101
,orphan description
";
    tokio::fs::write(&path, content).await.expect("write catalog");

    let (catalog, report) = catalog::load_from_path(&path).await.expect("load catalog");
    assert_eq!(report.entries, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(catalog.lookup("01"), Some("Live animals"));
    assert_eq!(catalog.lookup("0101"), Some("Horses"));
}

#[tokio::test]
async fn test_load_toml_catalog() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    let content = r#"
[catalog]
name = "excerpt"
version = "2022"

[[entries]]
code = "09"
description = "Coffee, tea, mate and spices"

[[entries]]
code = "0902"
description = "Tea"
"#;
    tokio::fs::write(&path, content).await.expect("write catalog");

    let (catalog, report) = catalog::load_from_path(&path).await.expect("load catalog");
    assert_eq!(report.entries, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(catalog.lookup("0902"), Some("Tea"));
}

#[tokio::test]
async fn test_duplicate_rows_keep_last_and_count_skipped() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.csv");
    tokio::fs::write(&path, "01,old description\n01,new description\n")
        .await
        .expect("write catalog");

    let (catalog, report) = catalog::load_from_path(&path).await.expect("load catalog");
    assert_eq!(report.entries, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(catalog.lookup("01"), Some("new description"));
}

#[tokio::test]
async fn test_empty_source_fails_construction() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.csv");
    tokio::fs::write(&path, "# only comments\n\n").await.expect("write catalog");

    let err = catalog::load_from_path(&path)
        .await
        .expect_err("empty catalog must not construct");
    assert!(matches!(err, CatalogLoadError::Empty { .. }));
}

#[tokio::test]
async fn test_missing_file_fails_construction() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.csv");

    let err = catalog::load_from_path(&path)
        .await
        .expect_err("missing catalog must not construct");
    assert!(matches!(err, CatalogLoadError::Io { .. }));
}

#[tokio::test]
async fn test_unparseable_toml_fails_construction() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    tokio::fs::write(&path, "this is not toml [").await.expect("write catalog");

    let err = catalog::load_from_path(&path)
        .await
        .expect_err("bad TOML must not construct");
    assert!(matches!(err, CatalogLoadError::Parse { .. }));
}

#[tokio::test]
async fn test_unknown_extension_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.xlsx");
    tokio::fs::write(&path, "whatever").await.expect("write catalog");

    let err = catalog::load_from_path(&path)
        .await
        .expect_err("unsupported format must not construct");
    assert!(matches!(err, CatalogLoadError::UnsupportedFormat { .. }));
}

#[test]
fn test_malformed_keys_are_stored_as_is() {
    // The loader does not validate code formats; a non-digit key simply
    // never matches a well-formed query.
    let catalog = hsn_validator::Catalog::from_entries([(
        "12AB".to_string(),
        "bogus row".to_string(),
    )]);
    assert!(catalog.contains("12AB"));
    assert_eq!(catalog.lookup("1234"), None);
}
