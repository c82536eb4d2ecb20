//! End-to-end tests: CSV directory or workbook to rendered views and REPL transcripts.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use ebom_cli::catalog::{load_catalog, replay, resolve_schema};
use ebom_cli::render::{ViewFormat, render_children, render_view};
use ebom_cli::repl::run_repl;
use ebom_core::{Catalog, LabelStyle, ViewOptions};
use ebom_model::{EbomError, SchemaConfig};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

fn dataset() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write(
        dir.path(),
        "Structure.csv",
        "Parent,Child,Name\nUNIT,ASSY1,Frame\nUNIT,ASSY2,Cover\nASSY2,SUB1,Bracket\n",
    );
    write(
        dir.path(),
        "Parts List.csv",
        "Parent,PartNumber,Designator,Quantity\nASSY1,P100,A1,2\nASSY1,P200,,\nSUB1,P300,,4\n",
    );
    write(
        dir.path(),
        "Parts.csv",
        "PartNumber,Description,Maker\nP100,Hex bolt,ACME\nP300,Washer,\n",
    );
    dir
}

fn catalog(dir: &TempDir) -> Catalog {
    load_catalog(dir.path(), &SchemaConfig::english()).expect("load catalog")
}

#[test]
fn missing_directory_is_data_unavailable() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("nope");

    let err = load_catalog(&missing, &SchemaConfig::english()).unwrap_err();

    assert!(matches!(err, EbomError::DataUnavailable { .. }));
    assert!(err.is_fatal());
}

#[test]
fn missing_relation_is_data_unavailable() {
    let dir = dataset();
    fs::remove_file(dir.path().join("Parts.csv")).expect("remove parts");

    let err = load_catalog(dir.path(), &SchemaConfig::english()).unwrap_err();

    match err {
        EbomError::DataUnavailable { reason } => assert!(reason.contains("Parts")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn schema_file_and_root_override_the_preset() {
    let dir = dataset();
    let schema_path = dir.path().join("schema.json");
    write(
        dir.path(),
        "schema.json",
        r#"{"parent_column": "Parent", "child_column": "Child", "root": "UNIT"}"#,
    );

    let schema = resolve_schema(
        SchemaConfig::default(),
        Some(schema_path.as_path()),
        Some("ASSY2"),
    )
    .expect("resolve schema");

    assert_eq!(schema.parent_column, "Parent");
    assert_eq!(schema.root, "ASSY2");
}

#[test]
fn replay_reaches_a_leaf_and_selects_the_part() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default());

    replay(&mut session, &["ASSY1".to_string()], Some("P200")).expect("replay");

    let rendered = render_view(&session.view());
    assert!(rendered.contains("Path: ASSY1"));
    assert!(rendered.contains("P100 [designator:A1, qty:2]"));
    assert!(rendered.contains("Part P200: specification not found."));
}

#[test]
fn replay_stops_at_the_first_rejection() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default());

    let err = replay(
        &mut session,
        &["ASSY2".to_string(), "BOGUS".to_string(), "SUB1".to_string()],
        None,
    )
    .unwrap_err();

    assert_eq!(
        err,
        EbomError::InvalidSelection {
            depth: 1,
            key: "BOGUS".to_string()
        }
    );
    assert_eq!(session.state().path, vec!["ASSY2".to_string()]);
}

#[test]
fn partial_view_prompts_for_more_levels() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default());
    session.select_at(0, "ASSY2").expect("select");

    let rendered = render_view(&session.view());

    assert!(rendered.contains("Level 1"));
    assert!(rendered.contains("Level 2"));
    assert!(rendered.contains("● ASSY2"));
    assert!(rendered.contains("○ SUB1"));
    assert!(rendered.contains("Parts are shown once a leaf assembly is reached."));
    // the third column is free, so nothing is scrolled or pending
    assert!(!rendered.contains("More levels below"));
    assert!(!rendered.contains("hidden"));
}

#[test]
fn narrow_window_notes_hidden_and_pending_levels() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default().with_window_size(1));
    session.select_at(0, "ASSY2").expect("select");

    let rendered = render_view(&session.view());

    assert!(rendered.contains("(1 earlier level(s) hidden; widen the window to see them)"));
    assert!(!rendered.contains("--window"));
    assert!(!rendered.contains("Level 1"));
    assert!(rendered.contains("Level 2"));
    assert!(rendered.contains("More levels below; select the marked item to continue."));
}

#[test]
fn workbook_source_renders_like_csv() {
    let workbook =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../ebom-ingest/tests/fixtures/ebom.xlsx");
    let catalog = load_catalog(&workbook, &SchemaConfig::default()).expect("load workbook");
    let mut session =
        catalog.session(ViewOptions::default().with_labels(LabelStyle::japanese()));

    replay(&mut session, &["ASSY1".to_string()], None).expect("replay");

    let rendered = render_view(&session.view());
    assert!(rendered.contains("Path: ASSY1"));
    assert!(rendered.contains("P100 [符号:A1, 数:2]"));
    assert!(rendered.contains("Specification: P100"));
    assert!(rendered.contains("SUS304"));
}

#[test]
fn empty_view_renders_root_items() {
    let dir = dataset();
    let view = catalog(&dir).session(ViewOptions::default()).view();

    let rendered = render_view(&view);

    assert!(rendered.contains("Path: (root)"));
    assert!(rendered.contains("○ ASSY1"));
    assert!(rendered.contains("Select an item to see its attributes."));
}

#[test]
fn json_view_uses_japanese_labels() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session =
        catalog.session(ViewOptions::default().with_labels(LabelStyle::japanese()));
    session.select_at(0, "ASSY1").expect("select");

    let json = ViewFormat::Json.render(&session.view()).expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    assert_eq!(
        value["parts"]["entries"][0]["display_label"],
        "P100 [符号:A1, 数:2]"
    );
    assert_eq!(value["spec"]["fields"]["Maker"], "ACME");
}

#[test]
fn children_listing() {
    let dir = dataset();
    let catalog = catalog(&dir);

    let rendered = render_children("UNIT", catalog.index().children_of("UNIT"));
    assert!(rendered.contains("Children of UNIT"));
    assert!(rendered.contains("ASSY2"));

    assert_eq!(
        render_children("ASSY1", catalog.index().children_of("ASSY1")),
        "ASSY1 has no children (leaf)."
    );
}

#[test]
fn repl_transcript() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default());
    let input = Cursor::new(
        "select 1 ASSY2\nselect 3 SUB1\nselect 2 SUB1\npart P300\nbogus\nquit\nselect 1 ASSY1\n",
    );
    let mut output = Vec::new();

    run_repl(&mut session, ViewFormat::Table, input, &mut output).expect("repl");

    let transcript = String::from_utf8(output).expect("utf8");
    assert!(
        transcript.contains("warning: cannot select at level 3 before level 2 is chosen")
    );
    assert!(transcript.contains("warning: unknown command 'bogus'"));
    assert!(transcript.contains("Specification: P300"));
    assert!(transcript.contains("Washer"));
    // commands after quit are never applied
    assert_eq!(session.state().path, vec!["ASSY2".to_string(), "SUB1".to_string()]);
    assert_eq!(session.state().selected_part.as_deref(), Some("P300"));
}

#[test]
fn repl_rejections_keep_the_session() {
    let dir = dataset();
    let catalog = catalog(&dir);
    let mut session = catalog.session(ViewOptions::default());
    let input = Cursor::new("select 1 ASSY1\npart P300\nreset\n");
    let mut output = Vec::new();

    run_repl(&mut session, ViewFormat::Table, input, &mut output).expect("repl");

    let transcript = String::from_utf8(output).expect("utf8");
    assert!(transcript.contains("warning: invalid selection 'P300' at level 2"));
    assert!(session.state().path.is_empty());
}
