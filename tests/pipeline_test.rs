//! End-to-end pipeline tests over temporary source/output directories.

use std::path::Path;

use htmlpack::{EmbedConfig, run};
use tempfile::TempDir;

fn config_for(root: &Path) -> EmbedConfig {
    EmbedConfig::default()
        .with_source_dir(root.join("src"))
        .with_output_dir(root.join("dist"))
}

fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdir");
    }
    std::fs::write(path, content).expect("write fixture");
}

fn read_output(root: &Path, name: &str) -> String {
    std::fs::read_to_string(root.join("dist").join(name)).expect("read output")
}

#[tokio::test]
async fn inlines_scripts_and_stylesheets() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/index.html", concat!(
        r#"<html><head><script src="a.js"></script>"#,
        r#"<link rel="stylesheet" href="b.css"></head>"#,
        r#"<body><p>hi</p></body></html>"#,
    ));
    write(tmp.path(), "src/a.js", "var x = 1;");
    write(tmp.path(), "src/b.css", "p { margin: 0; }");

    let summary = run(&config_for(tmp.path())).await.expect("run");
    assert_eq!(summary.queued, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.embedded, 2);
    assert_eq!(summary.skipped, 0);

    let out = read_output(tmp.path(), "index.html");
    assert!(out.contains("<script>var x = 1;</script>"));
    assert!(!out.contains("a.js"));
    assert!(out.contains("<style>p { margin: 0; }</style>"));
    assert!(!out.contains("b.css"));
}

#[tokio::test]
async fn stylesheet_image_references_become_data_uris() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/page.html", concat!(
        r#"<html><head><link rel="stylesheet" href="style.css"></head>"#,
        r#"<body></body></html>"#,
    ));
    write(
        tmp.path(),
        "src/style.css",
        "body { background: url(img/c.png); }",
    );
    write(tmp.path(), "src/img/c.png", [0x89u8, b'P', b'N', b'G']);

    run(&config_for(tmp.path())).await.expect("run");

    let out = read_output(tmp.path(), "page.html");
    assert!(out.contains("url(data:image/png;base64,"));
    assert!(!out.contains("img/c.png"));
}

#[tokio::test]
async fn image_flag_controls_img_inlining() {
    let tmp = TempDir::new().expect("tempdir");
    let html = r#"<html><body><img src="d.png"></body></html>"#;
    write(tmp.path(), "src/page.html", html);
    write(tmp.path(), "src/d.png", [0x89u8, b'P', b'N', b'G']);

    run(&config_for(tmp.path())).await.expect("run");
    assert!(read_output(tmp.path(), "page.html").contains(r#"src="d.png""#));

    let config = config_for(tmp.path()).with_images(true);
    run(&config).await.expect("run with images");
    assert!(
        read_output(tmp.path(), "page.html").contains("src=\"data:image/png;base64,")
    );
}

#[tokio::test]
async fn missing_resources_skip_without_failing_the_run() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/page.html", concat!(
        r#"<html><head><script src="gone.js"></script></head>"#,
        r#"<body><p>still here</p></body></html>"#,
    ));

    let summary = run(&config_for(tmp.path())).await.expect("run");
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.embedded, 0);
    assert_eq!(summary.skipped, 1);

    let out = read_output(tmp.path(), "page.html");
    assert!(out.contains(r#"<script src="gone.js"></script>"#));
}

#[tokio::test]
async fn zero_html_files_is_a_clean_terminal_state() {
    let tmp = TempDir::new().expect("tempdir");
    std::fs::create_dir(tmp.path().join("src")).expect("mkdir");
    write(tmp.path(), "src/readme.txt", "not html");

    let summary = run(&config_for(tmp.path())).await.expect("run");
    assert_eq!(summary.queued, 0);
    assert_eq!(summary.completed, 0);
    assert!(!tmp.path().join("dist").exists());
}

#[tokio::test]
async fn missing_source_directory_is_an_error() {
    let tmp = TempDir::new().expect("tempdir");
    assert!(run(&config_for(tmp.path())).await.is_err());
}

#[tokio::test]
async fn external_flag_makes_remote_references_fatal() {
    let tmp = TempDir::new().expect("tempdir");
    let html =
        r#"<html><head><script src="https://cdn.example.com/x.js"></script></head><body></body></html>"#;
    write(tmp.path(), "src/page.html", html);

    // Flag off: reference is left untouched.
    run(&config_for(tmp.path())).await.expect("run");
    assert!(
        read_output(tmp.path(), "page.html")
            .contains(r#"src="https://cdn.example.com/x.js""#)
    );

    // Flag on: the unimplemented fetch path always fails.
    let config = config_for(tmp.path()).with_external(true);
    assert!(run(&config).await.is_err());
}

#[tokio::test]
async fn every_discovered_file_is_written_exactly_once() {
    let tmp = TempDir::new().expect("tempdir");
    for i in 0..5 {
        write(
            tmp.path(),
            &format!("src/page{i}.html"),
            format!("<html><body><p>page {i}</p></body></html>"),
        );
    }

    let summary = run(&config_for(tmp.path())).await.expect("run");
    assert_eq!(summary.queued, 5);
    assert_eq!(summary.completed, 5);

    let written = std::fs::read_dir(tmp.path().join("dist"))
        .expect("read dist")
        .count();
    assert_eq!(written, 5);
}

#[tokio::test]
async fn minify_collapses_whitespace_outside_raw_text() {
    let tmp = TempDir::new().expect("tempdir");
    write(
        tmp.path(),
        "src/page.html",
        "<html><body><p>a   b\n\n   c</p></body></html>",
    );

    let config = config_for(tmp.path()).with_minify(true);
    run(&config).await.expect("run");

    let out = read_output(tmp.path(), "page.html");
    assert!(out.contains("<p>a b c</p>"));
}

#[tokio::test]
async fn output_directory_is_reused_when_it_already_exists() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "src/page.html", "<html><body></body></html>");
    std::fs::create_dir(tmp.path().join("dist")).expect("mkdir");

    let summary = run(&config_for(tmp.path())).await.expect("run");
    assert_eq!(summary.completed, 1);
    assert!(tmp.path().join("dist/page.html").is_file());
}
