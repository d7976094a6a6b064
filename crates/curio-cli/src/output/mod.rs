use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become key/value tables; a top-level list of objects becomes one
/// row per item. Object fields that are themselves lists of objects (ideas,
/// packages, shot steps) are rendered as their own section below.
fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_rows(items)),
        Value::Object(map) => {
            let mut scalars = Vec::new();
            let mut sections = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                        sections.push(format!("{key}:\n{}", render_rows(items)));
                    }
                    _ => scalars.push(vec![key.clone(), cell(value)]),
                }
            }
            let mut out = vec![table::render_table(&["key", "value"], &scalars, options())];
            out.extend(sections);
            Ok(out.join("\n\n"))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![cell(scalar)]], options())),
    }
}

/// One row per item, numbered from 1 so positions match `select` and
/// `hook-pick`. Columns are the union of the items' fields.
fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = vec![String::from("#")];
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut row = vec![(index + 1).to_string()];
            match item.as_object() {
                Some(map) => row.extend(
                    headers[1..]
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), cell)),
                ),
                None => row.push(cell(item)),
            }
            row
        })
        .collect::<Vec<_>>();

    if headers.len() == 1 {
        headers.push(String::from("value"));
    }
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
