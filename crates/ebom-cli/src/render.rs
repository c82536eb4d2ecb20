//! Text rendering of session views.

use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ebom_core::{AttributePanel, LevelView, LevelWindow, PartsPanel, SessionView, SpecPanel};
use ebom_model::Attributes;

/// Marker for an explicit choice.
const SELECTED: &str = "●";
/// Marker for the first option standing in for a missing choice.
const PROVISIONAL: &str = "○";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    #[default]
    Table,
    Json,
}

impl ViewFormat {
    pub fn render(self, view: &SessionView) -> serde_json::Result<String> {
        match self {
            Self::Table => Ok(render_view(view)),
            Self::Json => serde_json::to_string_pretty(view),
        }
    }
}

pub fn render_view(view: &SessionView) -> String {
    TableView(view).to_string()
}

/// Plain-text layout of a session view: path, level columns, then panels.
struct TableView<'a>(&'a SessionView);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        if view.path.is_empty() {
            writeln!(f, "Path: (root)")?;
        } else {
            writeln!(f, "Path: {}", view.path.join(" > "))?;
        }
        write_levels(f, &view.window)?;
        writeln!(f)?;
        writeln!(f, "Attributes")?;
        write_attributes(f, &view.attributes)?;
        writeln!(f)?;
        writeln!(f, "Parts")?;
        write_parts(f, &view.parts)?;
        write_spec(f, &view.spec)
    }
}

fn write_levels(f: &mut fmt::Formatter<'_>, window: &LevelWindow) -> fmt::Result {
    if window.levels.is_empty() {
        return writeln!(f, "No structure rows under the root.");
    }
    if window.hidden_before > 0 {
        writeln!(
            f,
            "({} earlier level(s) hidden; widen the window to see them)",
            window.hidden_before
        )?;
    }
    writeln!(f, "{}", levels_table(&window.levels))?;
    if window.more_levels_available {
        writeln!(f, "More levels below; select the marked item to continue.")?;
    }
    Ok(())
}

fn write_attributes(f: &mut fmt::Formatter<'_>, panel: &AttributePanel) -> fmt::Result {
    match panel {
        AttributePanel::NoSelection => writeln!(f, "Select an item to see its attributes."),
        AttributePanel::Empty => writeln!(f, "No attributes for the selected item."),
        AttributePanel::Found { attributes } => writeln!(f, "{}", fields_table(attributes)),
        AttributePanel::NotFound { parent, child } => {
            writeln!(f, "No structure row for {parent} -> {child}.")
        }
    }
}

fn write_parts(f: &mut fmt::Formatter<'_>, panel: &PartsPanel) -> fmt::Result {
    match panel {
        PartsPanel::NotLeaf => writeln!(f, "Parts are shown once a leaf assembly is reached."),
        PartsPanel::NoRows { leaf } => writeln!(f, "No parts list rows for {leaf}."),
        PartsPanel::NoDisplayableParts { leaf } => {
            writeln!(f, "No displayable parts under {leaf}.")
        }
        PartsPanel::Parts {
            entries, selected, ..
        } => {
            let mut table = Table::new();
            table.set_header(vec![
                header_cell(""),
                header_cell("Part"),
                header_cell("Designator"),
                header_cell("Qty"),
            ]);
            apply_table_style(&mut table);
            for (index, entry) in entries.iter().enumerate() {
                let marker = if index != selected.index {
                    ""
                } else if selected.provisional {
                    PROVISIONAL
                } else {
                    SELECTED
                };
                table.add_row(vec![
                    Cell::new(marker),
                    Cell::new(&entry.display_label),
                    optional_cell(entry.designator.as_deref()),
                    optional_cell(entry.quantity.as_deref()),
                ]);
            }
            align_column(&mut table, 3, CellAlignment::Right);
            writeln!(f, "{table}")
        }
    }
}

fn write_spec(f: &mut fmt::Formatter<'_>, panel: &SpecPanel) -> fmt::Result {
    match panel {
        SpecPanel::NoPart => Ok(()),
        SpecPanel::Found {
            part_number,
            fields,
        } => {
            writeln!(f)?;
            writeln!(f, "Specification: {part_number}")?;
            writeln!(f, "{}", fields_table(fields))
        }
        SpecPanel::NotFound { part_number } => {
            writeln!(f)?;
            writeln!(f, "Specification: {part_number}")?;
            writeln!(f, "Part {part_number}: specification not found.")
        }
    }
}

/// Children of one parent as a numbered list.
pub fn render_children(parent: &str, children: &[String]) -> String {
    if children.is_empty() {
        return format!("{parent} has no children (leaf).");
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(&format!("Children of {parent}"))]);
    apply_table_style(&mut table);
    for (index, child) in children.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(child)]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table.to_string()
}

/// One column per visible level, one row per option.
fn levels_table(levels: &[LevelView]) -> Table {
    let mut table = Table::new();
    table.set_header(
        levels
            .iter()
            .map(|level| header_cell(&format!("Level {}", level.level)))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let rows = levels.iter().map(|level| level.options.len()).max().unwrap_or(0);
    for row in 0..rows {
        let cells: Vec<Cell> = levels
            .iter()
            .map(|level| match level.options.get(row) {
                None => Cell::new(""),
                Some(option) => match &level.selected {
                    Some(selected) if selected.index == row && !selected.provisional => {
                        Cell::new(format!("{SELECTED} {option}")).add_attribute(Attribute::Bold)
                    }
                    Some(selected) if selected.index == row => {
                        Cell::new(format!("{PROVISIONAL} {option}"))
                    }
                    _ => Cell::new(format!("  {option}")),
                },
            })
            .collect();
        table.add_row(cells);
    }
    table
}

fn fields_table(fields: &Attributes) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (column, value) in fields.present() {
        table.add_row(vec![dim_cell(column), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}
