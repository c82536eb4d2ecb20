//! CLI argument definitions for the EBOM viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ebom",
    version,
    about = "EBOM Viewer - drill down through a bill of materials",
    long_about = "Drill down through a hierarchical bill of materials stored as three CSV\n\
                  tables (Structure, Parts List, Parts) until a leaf assembly is reached,\n\
                  then show its parts list and the specification of the chosen part."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay selections and print the resulting view.
    Show(ShowArgs),

    /// List the children of a parent key (level 1 items by default).
    Children(ChildrenArgs),

    /// Navigate interactively, one command per line on stdin.
    Browse(BrowseArgs),
}

/// Where the tables live and how their columns are named.
#[derive(Args)]
pub struct DataArgs {
    /// Directory containing Structure.csv, Parts List.csv and Parts.csv, or
    /// a workbook (.xlsx, .xls, .ods) with sheets of those names.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// JSON file overriding relation names, key columns or the root sentinel.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Built-in column naming to start from.
    #[arg(long = "schema-preset", value_enum, default_value = "japanese")]
    pub schema_preset: SchemaPresetArg,

    /// Override the root sentinel parent key.
    #[arg(long = "root", value_name = "KEY")]
    pub root: Option<String>,
}

/// How the view is laid out.
#[derive(Args)]
pub struct ViewArgs {
    /// Number of structure levels shown side by side.
    #[arg(long = "window", value_name = "N", default_value_t = 3)]
    pub window: usize,

    /// Annotation names in part labels.
    #[arg(long = "labels", value_enum, default_value = "english")]
    pub labels: LabelsArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Key to select at the next level; repeat to go deeper.
    #[arg(long = "select", short = 's', value_name = "KEY")]
    pub select: Vec<String>,

    /// Part number to select once a leaf is reached.
    #[arg(long = "part", short = 'p', value_name = "PART_NUMBER")]
    pub part: Option<String>,
}

#[derive(Args)]
pub struct ChildrenArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Parent key (defaults to the root sentinel).
    #[arg(value_name = "PARENT")]
    pub parent: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaPresetArg {
    /// 親品番 / 子品番 / 部品番号 / 符号 / 構成数, root 装置.
    Japanese,
    /// Parent / Child / PartNumber / Designator / Quantity, root UNIT.
    English,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LabelsArg {
    English,
    Japanese,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
