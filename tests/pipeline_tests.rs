use remould::cli::OutputFormat;
use remould::output::{self, ConfirmOverwrite, PipelineOptions};
use remould::{normalize, NormalizedResume, ResumeRecord};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scripted replacement for the stdin prompt.
struct Scripted(bool);

impl ConfirmOverwrite for Scripted {
    fn confirm(&mut self, _path: &Path) -> bool {
        self.0
    }
}

fn sample_data() -> NormalizedResume {
    let record: ResumeRecord = serde_json::from_value(json!({
        "basics": {"name": "Ada Lovelace"},
        "languages": [{"language": "English", "fluency": "Native"}]
    }))
    .expect("test resume must be a JSON object");
    normalize(&record, "5551234567", "ada@example.com").expect("normalize")
}

/// Creates `<root>/themes/<theme>/` with both template files and returns
/// (theme root, output root).
fn setup_theme(workspace: &TempDir, theme: &str) -> (PathBuf, PathBuf) {
    let theme_root = workspace.path().join("themes");
    let theme_dir = theme_root.join(theme);
    fs::create_dir_all(&theme_dir).expect("create theme dir");
    fs::write(
        theme_dir.join("template.html"),
        "<h1>{{ data.basics.name }}</h1><p>{{ ext }}</p>",
    )
    .expect("write html template");
    fs::write(
        theme_dir.join("template.txt"),
        "{{ data.basics.name }} <{{ data.basics.email }}>",
    )
    .expect("write txt template");

    (theme_root, workspace.path().join("out"))
}

fn opts(theme_root: PathBuf, output_dir: PathBuf, overwrite: bool) -> PipelineOptions {
    PipelineOptions {
        theme_dir: theme_root,
        output_dir,
        output_name: "resume".to_string(),
        overwrite,
    }
}

#[test]
fn test_artifacts_land_under_theme_directory() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Html, OutputFormat::Txt],
        &opts(theme_root, output_dir.clone(), false),
        &mut Scripted(false),
    );

    assert_eq!(summary.written, 2);
    assert_eq!(summary.failed, 0);

    let html = fs::read_to_string(output_dir.join("handmade").join("resume.html"))
        .expect("html artifact");
    assert_eq!(html, "<h1>Ada Lovelace</h1><p>html</p>");

    let txt =
        fs::read_to_string(output_dir.join("handmade").join("resume.txt")).expect("txt artifact");
    assert_eq!(txt, "Ada Lovelace <ada@example.com>");
}

#[test]
fn test_declined_overwrite_preserves_existing_file() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    let target = output_dir.join("handmade").join("resume.txt");
    fs::create_dir_all(target.parent().unwrap()).expect("create output dir");
    fs::write(&target, "hand-edited copy").expect("seed existing artifact");

    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Txt],
        &opts(theme_root, output_dir, false),
        &mut Scripted(false),
    );

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.written, 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "hand-edited copy");
}

#[test]
fn test_declined_overwrite_skips_before_rendering() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    // A template that cannot render: if the declined artifact were still
    // rendered, this combination would count as a failure, not a skip.
    fs::write(
        theme_root.join("handmade").join("template.txt"),
        "{{ data.basics.nickname }}",
    )
    .expect("write broken template");

    let target = output_dir.join("handmade").join("resume.txt");
    fs::create_dir_all(target.parent().unwrap()).expect("create output dir");
    fs::write(&target, "hand-edited copy").expect("seed existing artifact");

    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Txt],
        &opts(theme_root, output_dir, false),
        &mut Scripted(false),
    );

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "hand-edited copy");
}

#[test]
fn test_overwrite_flag_replaces_without_prompt() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    let target = output_dir.join("handmade").join("resume.txt");
    fs::create_dir_all(target.parent().unwrap()).expect("create output dir");
    fs::write(&target, "hand-edited copy").expect("seed existing artifact");

    // A scripted "no" must never be consulted when --overwrite is set
    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Txt],
        &opts(theme_root, output_dir, true),
        &mut Scripted(false),
    );

    assert_eq!(summary.written, 1);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "Ada Lovelace <ada@example.com>"
    );
}

#[test]
fn test_missing_template_does_not_stop_siblings() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");
    fs::remove_file(theme_root.join("handmade").join("template.html"))
        .expect("drop html template");

    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Html, OutputFormat::Txt],
        &opts(theme_root, output_dir.clone(), false),
        &mut Scripted(false),
    );

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written, 1);
    assert!(output_dir.join("handmade").join("resume.txt").exists());
    assert!(!output_dir.join("handmade").join("resume.html").exists());
}

#[test]
fn test_pdf_leaves_no_intermediate_html() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    // Conversion needs wkhtmltopdf on PATH; pass or fail, the temp HTML
    // written next to the target must be cleaned up.
    let summary = output::run(
        &sample_data(),
        &["handmade".to_string()],
        &[OutputFormat::Pdf],
        &opts(theme_root, output_dir.clone(), false),
        &mut Scripted(false),
    );

    assert_eq!(summary.written + summary.failed, 1);
    assert!(!output_dir
        .join("handmade")
        .join("resume.pdf.html")
        .exists());
}

#[test]
fn test_themes_render_independently() {
    let workspace = TempDir::new().expect("temp workspace");
    let (theme_root, output_dir) = setup_theme(&workspace, "handmade");

    let plain = theme_root.join("plain");
    fs::create_dir_all(&plain).expect("create plain theme");
    fs::write(plain.join("template.txt"), "{{ data.basics.name }}").expect("write txt template");

    // plain has no HTML template, handmade has both
    let summary = output::run(
        &sample_data(),
        &["handmade".to_string(), "plain".to_string()],
        &[OutputFormat::Html, OutputFormat::Txt],
        &opts(theme_root, output_dir.clone(), false),
        &mut Scripted(false),
    );

    assert_eq!(summary.written, 3);
    assert_eq!(summary.failed, 1);
    assert!(output_dir.join("handmade").join("resume.html").exists());
    assert!(output_dir.join("plain").join("resume.txt").exists());
    assert!(!output_dir.join("plain").join("resume.html").exists());
}
