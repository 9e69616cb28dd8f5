//! End-to-end builds over a temporary project directory

use dtcss::config::{load_defaults, Loader, PROJECT_CONFIG_FILE};
use dtcss::formats::FormatError;
use dtcss::{build, BuildError, DiscoverError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const HEADER: &str = "/**\n * Do not edit directly, this file was auto-generated.\n */\n\n";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "tokens/base/light.json",
        r##"{"color": {"bg": {"$value": "#fff", "$description": "Page background"}}}"##,
    );
    write(
        dir.path(),
        "tokens/base/dark.json",
        r##"{"color": {"bg": {"$value": "#000"}}}"##,
    );
    write(
        dir.path(),
        "tokens/semantic/light.json",
        r##"{"surface": {"default": {"$value": "{color.bg}"}}}"##,
    );
    write(
        dir.path(),
        "tokens/semantic/dark.json",
        r##"{"surface": {"default": {"$value": "{color.bg}"}}}"##,
    );
    write(
        dir.path(),
        "tokens/dimension/base.json",
        r##"{"space": {"sm": {"value": {"magnitude": "8", "unit": "px"}}}}"##,
    );
    dir
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn default_platforms_write_every_file() {
    let dir = project();
    let config = load_defaults().unwrap();

    let report = build(&config, dir.path()).expect("build");

    assert_eq!(report.token_files(), 5);
    assert!(report.skipped.is_empty());
    let written: Vec<_> = report
        .artifacts
        .iter()
        .map(|a| a.path.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        written,
        vec![
            PathBuf::from("build/css/base/colors.css"),
            PathBuf::from("build/css/dimension/variables.css"),
            PathBuf::from("build/css/semantic/colors.css"),
            PathBuf::from("build/css/text/variables.css"),
        ]
    );
}

#[test]
fn base_colors_split_light_and_dark() {
    let dir = project();
    build(&load_defaults().unwrap(), dir.path()).unwrap();

    assert_eq!(
        read(dir.path(), "build/css/base/colors.css"),
        format!(
            "{HEADER}:root {{\n  --color-bg: #fff; /* Page background */\n}}\n\n\
             @media (prefers-color-scheme: dark) {{\n  :root {{\n    --color-bg: #000;\n  }}\n}}\n"
        )
    );
}

#[test]
fn semantic_colors_reference_base_variables() {
    let dir = project();
    build(&load_defaults().unwrap(), dir.path()).unwrap();

    let css = read(dir.path(), "build/css/semantic/colors.css");
    insta::assert_snapshot!(css, @r"
    /**
     * Do not edit directly, this file was auto-generated.
     */

    :root {
      --surface-default: var(--color-bg);
    }

    @media (prefers-color-scheme: dark) {
      :root {
        --surface-default: var(--color-bg);
      }
    }
    ");
    assert!(!css.contains("#fff"));
}

#[test]
fn dimensions_go_to_their_own_platform() {
    let dir = project();
    build(&load_defaults().unwrap(), dir.path()).unwrap();

    assert_eq!(
        read(dir.path(), "build/css/dimension/variables.css"),
        format!("{HEADER}:root {{\n  --space-sm: 8px;\n}}\n")
    );
    assert!(!read(dir.path(), "build/css/base/colors.css").contains("space-sm"));
    assert_eq!(read(dir.path(), "build/css/text/variables.css"), HEADER);
}

#[test]
fn malformed_source_is_skipped_and_reported() {
    let dir = project();
    write(dir.path(), "tokens/base/broken.json", "{ \"color\": ");

    let report = build(&load_defaults().unwrap(), dir.path()).expect("build");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, PathBuf::from("tokens/base/broken.json"));
    assert_eq!(report.artifacts.len(), 4);
    assert!(read(dir.path(), "build/css/base/colors.css").contains("--color-bg: #000;"));
}

#[test]
fn project_config_selects_reference_mode() {
    let dir = project();
    write(
        dir.path(),
        PROJECT_CONFIG_FILE,
        r#"
[platforms.css_semantic]
build_path = "out/"

[[platforms.css_semantic.files]]
destination = "resolved.css"
format = "css/variables"
references = "value"
filter = { path_contains = ["semantic"] }
"#,
    );
    let config = Loader::new().with_project_root(dir.path()).build().unwrap();

    build(&config, dir.path()).unwrap();

    let css = read(dir.path(), "out/resolved.css");
    assert!(css.contains(":root {\n  --surface-default: #fff;\n}"));
    assert!(css.contains("    --surface-default: #000;\n"));
}

#[test]
fn unknown_format_fails_the_build() {
    let dir = project();
    write(
        dir.path(),
        "custom.toml",
        r#"
[[platforms.css_text.files]]
destination = "text.scss"
format = "scss/map"
"#,
    );
    let config = Loader::new()
        .with_file(dir.path().join("custom.toml"))
        .build()
        .unwrap();

    match build(&config, dir.path()) {
        Err(BuildError::Format {
            platform,
            source: FormatError::FormatNotFound(name),
            ..
        }) => {
            assert_eq!(platform, "css_text");
            assert_eq!(name, "scss/map");
        }
        other => panic!("expected unknown format error, got {other:?}"),
    }
}

#[test]
fn invalid_source_pattern_fails_the_build() {
    let dir = project();
    let config = Loader::new()
        .set_override("source.include", vec!["tokens/***/x.json"])
        .unwrap()
        .build()
        .unwrap();

    assert!(matches!(
        build(&config, dir.path()),
        Err(BuildError::Discover(DiscoverError::Pattern(_)))
    ));
}

#[test]
fn dot_relative_root_builds_from_root_relative_sources() {
    let dir = tempfile::Builder::new()
        .prefix("darkroom")
        .tempdir_in(".")
        .unwrap();
    write(
        dir.path(),
        "tokens/base/light.json",
        r##"{"color": {"bg": {"$value": "#fff"}}}"##,
    );
    let root = Path::new(".").join(dir.path().file_name().unwrap());

    let report = build(&load_defaults().unwrap(), &root).expect("build");

    assert!(report.skipped.is_empty());
    assert_eq!(report.sources, vec![PathBuf::from("tokens/base/light.json")]);
    assert_eq!(
        read(&root, "build/css/base/colors.css"),
        format!("{HEADER}:root {{\n  --color-bg: #fff;\n}}\n")
    );
}
