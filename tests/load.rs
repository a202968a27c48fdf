use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use flagfile::{
    Error, FlagSet, ParseErrorKind, ParseOptions, from_path, from_path_with_options,
};

#[test]
fn loads_typed_flags_from_a_file() {
    let dir = make_temp_dir("load-basic");
    let file = dir.join("app.conf");
    write_file(
        &file,
        "# service configuration\nverbose = 1\nworkers=4\nname=demo ; deployment name\n",
    );

    let mut flags = FlagSet::new();
    flags.define_bool("verbose", false);
    flags.define_uint("workers", 1);
    flags.define_str("name", "");

    from_path(&file, &mut flags).expect("load should succeed");
    assert_eq!(flags.get_bool("verbose"), Some(true));
    assert_eq!(flags.get_uint("workers"), Some(4));
    assert_eq!(flags.get_str("name"), Some("demo"));
}

#[test]
fn loads_sectioned_file_with_dotted_flags() {
    let dir = make_temp_dir("load-sections");
    let file = dir.join("app.conf");
    write_file(&file, "[server]\nhost=localhost\nport=8080\n[]\nverbose=1\n");

    let mut flags = FlagSet::new();
    flags.define_str("server.host", "");
    flags.define_uint("server.port", 0);
    flags.define_bool("verbose", false);

    let options = ParseOptions::new().parse_sections(true);
    from_path_with_options(&file, &mut flags, &options).expect("load should succeed");

    assert_eq!(flags.get_str("server.host"), Some("localhost"));
    assert_eq!(flags.get_uint("server.port"), Some(8080));
    assert_eq!(flags.get_bool("verbose"), Some(true));
}

#[test]
fn missing_file_returns_io_error_without_position() {
    let dir = make_temp_dir("load-missing");
    let missing = dir.join("missing.conf");

    let mut flags = FlagSet::new();
    let err = from_path(&missing, &mut flags).expect_err("expected I/O error");

    match err {
        Error::Io(_) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_failure_renders_path_and_line_number() {
    let dir = make_temp_dir("load-annotated");
    let file = dir.join("app.conf");
    write_file(&file, "a=1\n# comment\n\nnot an assignment\n");

    let mut flags = FlagSet::new();
    flags.define_str("a", "");

    let err = from_path(&file, &mut flags).expect_err("expected parse error");
    let Error::Parse(parse_err) = err else {
        panic!("unexpected error variant");
    };

    assert_eq!(parse_err.file.as_deref(), Some(file.as_path()));
    assert_eq!(parse_err.line, 4);
    let rendered = parse_err.to_string();
    assert!(
        rendered.starts_with(&format!("{}:4: ", file.display())),
        "unexpected rendering: {rendered}"
    );
}

#[test]
fn earlier_assignments_survive_a_failing_line() {
    let dir = make_temp_dir("load-partial");
    let file = dir.join("app.conf");
    write_file(&file, "kept=before\nunknown=value\nkept=after\n");

    let mut flags = FlagSet::new();
    flags.define_str("kept", "");

    let err = from_path(&file, &mut flags).expect_err("expected parse error");
    let Error::Parse(parse_err) = err else {
        panic!("unexpected error variant");
    };
    assert_eq!(parse_err.line, 2);
    assert!(matches!(&parse_err.kind, ParseErrorKind::UnknownKey(key) if key == "unknown"));
    // Applied lines stay applied; the line after the failure never ran.
    assert_eq!(flags.get_str("kept"), Some("before"));
}

#[test]
fn rejected_value_error_carries_path_and_reason() {
    let dir = make_temp_dir("load-rejected");
    let file = dir.join("app.conf");
    write_file(&file, "workers=many\n");

    let mut flags = FlagSet::new();
    flags.define_uint("workers", 1);

    let err = from_path(&file, &mut flags).expect_err("expected parse error");
    let Error::Parse(parse_err) = err else {
        panic!("unexpected error variant");
    };
    assert_eq!(parse_err.line, 1);
    assert!(matches!(
        &parse_err.kind,
        ParseErrorKind::Rejected { key, reason } if key == "workers" && reason.contains("many")
    ));
    assert!(parse_err.to_string().contains(&file.display().to_string()));
}

fn make_temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    path.push(format!("flagfile-{name}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&path).expect("failed to create temp dir");
    path
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).expect("failed to write test file");
}
