use std::io;

use anyhow::{Context, Result};
use ebom_cli::catalog::{load_catalog, replay, resolve_schema};
use ebom_cli::render::{ViewFormat, render_children};
use ebom_cli::repl::{HELP, run_repl};
use ebom_core::{Catalog, LabelStyle, ViewOptions};
use ebom_model::SchemaConfig;
use tracing::info_span;

use crate::cli::{
    BrowseArgs, ChildrenArgs, DataArgs, LabelsArg, OutputFormatArg, SchemaPresetArg, ShowArgs,
    ViewArgs,
};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let catalog = open_catalog(&args.data)?;
    let mut session = catalog.session(view_options(&args.view));
    if let Err(error) = replay(&mut session, &args.select, args.part.as_deref()) {
        eprintln!("warning: {error}");
    }
    let rendered = view_format(args.view.format)
        .render(&session.view())
        .context("render view")?;
    println!("{rendered}");
    Ok(())
}

pub fn run_children(args: &ChildrenArgs) -> Result<()> {
    let catalog = open_catalog(&args.data)?;
    let index = catalog.index();
    let parent = args.parent.as_deref().unwrap_or(index.root());
    let children = index.children_of(parent);
    match args.format {
        OutputFormatArg::Table => println!("{}", render_children(parent, children)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(children).context("render children")?
        ),
    }
    Ok(())
}

pub fn run_browse(args: &BrowseArgs) -> Result<()> {
    let catalog = open_catalog(&args.data)?;
    let mut session = catalog.session(view_options(&args.view));
    eprintln!("{HELP}");
    let stdin = io::stdin();
    run_repl(
        &mut session,
        view_format(args.view.format),
        stdin.lock(),
        io::stdout().lock(),
    )
}

fn open_catalog(args: &DataArgs) -> Result<Catalog> {
    let span = info_span!("dataset", source = %args.source.display());
    let _guard = span.enter();
    let preset = match args.schema_preset {
        SchemaPresetArg::Japanese => SchemaConfig::default(),
        SchemaPresetArg::English => SchemaConfig::english(),
    };
    let schema = resolve_schema(preset, args.schema.as_deref(), args.root.as_deref())
        .context("load schema config")?;
    load_catalog(&args.source, &schema)
        .with_context(|| format!("load EBOM tables from {}", args.source.display()))
}

fn view_options(args: &ViewArgs) -> ViewOptions {
    let labels = match args.labels {
        LabelsArg::English => LabelStyle::default(),
        LabelsArg::Japanese => LabelStyle::japanese(),
    };
    ViewOptions::default()
        .with_window_size(args.window)
        .with_labels(labels)
}

fn view_format(format: OutputFormatArg) -> ViewFormat {
    match format {
        OutputFormatArg::Table => ViewFormat::Table,
        OutputFormatArg::Json => ViewFormat::Json,
    }
}
