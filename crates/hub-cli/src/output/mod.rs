use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Cell, Column, ColumnKind, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Lists become one row per record; a single record (including the nested
/// records of an accept response) becomes a field/value listing.
fn render_table(value: Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => list_table(&items),
        Value::Object(map) => record_table(map),
        scalar => Cell::typed(ColumnKind::Text, &scalar).text,
    }
}

fn list_table(items: &[Value]) -> String {
    if !items.iter().all(Value::is_object) {
        let columns = [Column::new("value", ColumnKind::Text)];
        let rows: Vec<Vec<Cell>> = items
            .iter()
            .map(|item| vec![Cell::typed(ColumnKind::Text, item)])
            .collect();
        return table::render(&columns, &rows, table_options());
    }

    let mut columns: Vec<Column> = Vec::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !columns.iter().any(|c| &c.header == key) {
                columns.push(Column::new(key.clone(), ColumnKind::of(key)));
            }
        }
    }
    columns.sort_by(|a, b| (a.kind, &a.header).cmp(&(b.kind, &b.header)));

    let rows: Vec<Vec<Cell>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            columns
                .iter()
                .map(|column| {
                    Cell::typed(column.kind, map.get(&column.header).unwrap_or(&Value::Null))
                })
                .collect()
        })
        .collect();
    table::render(&columns, &rows, table_options())
}

fn record_table(map: Map<String, Value>) -> String {
    let mut fields = Vec::new();
    flatten(None, map, &mut fields);
    fields.sort_by(|(a, _), (b, _)| {
        let (a_group, b_group) = (group(a), group(b));
        (a_group, ColumnKind::of(a), a).cmp(&(b_group, ColumnKind::of(b), b))
    });

    let columns = [
        Column::new("field", ColumnKind::Text),
        Column::new("value", ColumnKind::Text),
    ];
    let rows: Vec<Vec<Cell>> = fields
        .iter()
        .map(|(field, value)| {
            let kind = ColumnKind::of(field);
            vec![Cell::plain(field.clone()), Cell::typed(kind, value)]
        })
        .collect();
    table::render(&columns, &rows, table_options())
}

/// Dotted prefix of a flattened field, so nested records stay together.
fn group(field: &str) -> &str {
    field.rsplit_once('.').map_or("", |(prefix, _)| prefix)
}

fn flatten(prefix: Option<&str>, map: Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let field = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
        match value {
            Value::Object(inner) => flatten(Some(&field), inner, out),
            other => out.push((field, other)),
        }
    }
}
