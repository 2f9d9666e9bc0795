//! Column descriptors and cell resolution for the data table.

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use crate::shared::date_format::{format_timestamp_display, is_date_like_key};

/// What a cell renderer produces. Export only carries `Text` and `Number`;
/// `View` cells export as empty string.
#[derive(Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
    View(Arc<dyn Fn() -> AnyView + Send + Sync>),
    Empty,
}

impl CellValue {
    pub fn view(f: impl Fn() -> AnyView + Send + Sync + 'static) -> Self {
        CellValue::View(Arc::new(f))
    }
}

/// Describes one table column: how to title, source and render it.
#[derive(Clone)]
pub struct Column<T> {
    pub key: String,
    pub title: String,
    /// Row property to read when no custom renderer is given.
    pub data_index: Option<String>,
    /// Custom renderer; takes precedence over `data_index`.
    pub render: Option<Arc<dyn Fn(&T) -> CellValue + Send + Sync>>,
    pub th_class: Option<String>,
    pub td_class: Option<String>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_index: None,
            render: None,
            th_class: None,
            td_class: None,
        }
    }

    pub fn data_index(mut self, index: impl Into<String>) -> Self {
        self.data_index = Some(index.into());
        self
    }

    pub fn render(mut self, f: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn th_class(mut self, class: impl Into<String>) -> Self {
        self.th_class = Some(class.into());
        self
    }

    pub fn td_class(mut self, class: impl Into<String>) -> Self {
        self.td_class = Some(class.into());
        self
    }
}

/// Resolve a cell for display: custom renderer first, then `data_index`
/// lookup with the date-key heuristic, then `"-"`.
///
/// `row_json` is a serialized snapshot of the row, computed once per row.
pub fn resolve_display<T>(column: &Column<T>, row: &T, row_json: &Value) -> CellValue {
    if let Some(render) = &column.render {
        return render(row);
    }
    let Some(index) = &column.data_index else {
        return CellValue::Empty;
    };
    let raw = match row_json.get(index) {
        None | Some(Value::Null) => return CellValue::Empty,
        Some(v) => v,
    };

    if let Value::String(text) = raw {
        if is_date_like_key(index) || is_date_like_key(&column.key) {
            match format_timestamp_display(text) {
                Some(formatted) => return CellValue::Text(formatted),
                None => {
                    log::warn!("date parsing failed for value: {}", text);
                }
            }
        }
    }

    scalar_cell(raw)
}

/// Resolve a cell for CSV/PDF export. Renderer output is restricted to
/// text/number; date formatting is not applied.
pub fn resolve_export<T>(column: &Column<T>, row: &T, row_json: &Value) -> String {
    if let Some(render) = &column.render {
        return match render(row) {
            CellValue::Text(text) => text,
            CellValue::Number(n) => format_number(n),
            CellValue::View(_) | CellValue::Empty => String::new(),
        };
    }
    let Some(index) = &column.data_index else {
        return String::new();
    };
    match row_json.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => format_number(n.as_f64().unwrap_or_default()),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => String::new(),
    }
}

fn scalar_cell(value: &Value) -> CellValue {
    match value {
        Value::String(text) => CellValue::Text(text.clone()),
        Value::Number(n) => CellValue::Number(n.as_f64().unwrap_or_default()),
        Value::Bool(b) => CellValue::Text(b.to_string()),
        // Nested structures need a custom renderer to mean anything.
        Value::Array(_) | Value::Object(_) | Value::Null => CellValue::Empty,
    }
}

/// Columns shown in the table body. Declaration order wins: the visible
/// set only filters, never reorders. The `actions` column additionally
/// requires one of `action_permission` to be held (empty means ungated).
pub fn displayed_columns<T: Clone>(
    columns: &[Column<T>],
    visible: &[String],
    action_permission: &[String],
    held: &[String],
) -> Vec<Column<T>> {
    columns
        .iter()
        .filter(|c| visible.contains(&c.key))
        .filter(|c| {
            c.key != "actions"
                || action_permission.is_empty()
                || action_permission.iter().any(|p| held.contains(p))
        })
        .cloned()
        .collect()
}

/// Columns carried into CSV/PDF export: the visible set minus action
/// columns, which have no scalar value.
pub fn exportable_columns<T: Clone>(columns: &[Column<T>], visible: &[String]) -> Vec<Column<T>> {
    columns
        .iter()
        .filter(|c| {
            visible.contains(&c.key)
                && !matches!(c.key.to_lowercase().as_str(), "actions" | "action")
        })
        .cloned()
        .collect()
}

pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Clone)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: i64,
        name: String,
        created_at: String,
        note: Option<String>,
    }

    fn row() -> (Row, Value) {
        let row = Row {
            id: 7,
            name: "Napa".into(),
            created_at: "2025-12-13T12:40:00Z".into(),
            note: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        (row, json)
    }

    fn text_of(cell: CellValue) -> String {
        match cell {
            CellValue::Text(t) => t,
            CellValue::Number(n) => format_number(n),
            CellValue::Empty => "-".into(),
            CellValue::View(_) => "<view>".into(),
        }
    }

    #[test]
    fn render_takes_precedence_over_data_index() {
        let (row, json) = row();
        let column = Column::<Row>::new("name", "Name")
            .data_index("name")
            .render(|r: &Row| CellValue::Text(format!("#{}", r.id)));
        assert_eq!(text_of(resolve_display(&column, &row, &json)), "#7");

        let column = Column::<Row>::new("name", "Name").data_index("name");
        assert_eq!(text_of(resolve_display(&column, &row, &json)), "Napa");
    }

    #[test]
    fn date_like_index_formats_timestamps() {
        let (row, json) = row();
        let column = Column::<Row>::new("createdAt", "Created At").data_index("createdAt");
        assert_eq!(
            text_of(resolve_display(&column, &row, &json)),
            "Dec 13, 2025, 12:40 PM"
        );
    }

    #[test]
    fn unparseable_date_falls_back_to_raw_value() {
        let row = Row {
            id: 1,
            name: "x".into(),
            created_at: "not-a-date".into(),
            note: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        let column = Column::<Row>::new("createdAt", "Created At").data_index("createdAt");
        assert_eq!(text_of(resolve_display(&column, &row, &json)), "not-a-date");
    }

    #[test]
    fn missing_and_null_values_display_as_dash() {
        let (row, json) = row();
        let column = Column::<Row>::new("note", "Note").data_index("note");
        assert_eq!(text_of(resolve_display(&column, &row, &json)), "-");

        let column = Column::<Row>::new("ghost", "Ghost").data_index("ghost");
        assert_eq!(text_of(resolve_display(&column, &row, &json)), "-");
    }

    #[test]
    fn export_keeps_text_and_number_renders_only() {
        let (row, json) = row();
        let column = Column::<Row>::new("x", "X").render(|_| CellValue::view(|| ().into_any()));
        assert_eq!(resolve_export(&column, &row, &json), "");

        let column = Column::<Row>::new("id", "ID").data_index("id");
        assert_eq!(resolve_export(&column, &row, &json), "7");

        let column = Column::<Row>::new("x", "X").render(|r: &Row| CellValue::Number(r.id as f64));
        assert_eq!(resolve_export(&column, &row, &json), "7");
    }

    #[test]
    fn export_does_not_date_format() {
        let (row, json) = row();
        let column = Column::<Row>::new("createdAt", "Created At").data_index("createdAt");
        assert_eq!(resolve_export(&column, &row, &json), "2025-12-13T12:40:00Z");
    }

    fn keys<T>(cols: &[Column<T>]) -> Vec<&str> {
        cols.iter().map(|c| c.key.as_str()).collect()
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn visibility_filters_without_reordering() {
        let columns = vec![
            Column::<Row>::new("id", "ID"),
            Column::<Row>::new("name", "Name"),
            Column::<Row>::new("createdAt", "Created At"),
        ];
        let visible = strings(&["createdAt", "id"]);
        let shown = displayed_columns(&columns, &visible, &[], &[]);
        assert_eq!(keys(&shown), vec!["id", "createdAt"]);

        // Re-toggling a hidden key restores its declared position.
        let visible = strings(&["createdAt", "id", "name"]);
        let shown = displayed_columns(&columns, &visible, &[], &[]);
        assert_eq!(keys(&shown), vec!["id", "name", "createdAt"]);
    }

    #[test]
    fn actions_column_needs_a_held_permission() {
        let columns = vec![
            Column::<Row>::new("id", "ID"),
            Column::<Row>::new("actions", "Actions"),
        ];
        let visible = strings(&["id", "actions"]);
        let required = strings(&["update-user", "delete-user"]);

        let held = strings(&["delete-user"]);
        let shown = displayed_columns(&columns, &visible, &required, &held);
        assert_eq!(keys(&shown), vec!["id", "actions"]);

        // Toggled visible but no permission held: still hidden.
        let held = strings(&["readAll-user"]);
        let shown = displayed_columns(&columns, &visible, &required, &held);
        assert_eq!(keys(&shown), vec!["id"]);

        // An ungated actions column shows for anyone.
        let shown = displayed_columns(&columns, &visible, &[], &[]);
        assert_eq!(keys(&shown), vec!["id", "actions"]);
    }

    #[test]
    fn export_drops_action_columns() {
        let columns = vec![
            Column::<Row>::new("id", "ID"),
            Column::<Row>::new("actions", "Actions"),
        ];
        let visible = strings(&["id", "actions"]);
        assert_eq!(keys(&exportable_columns(&columns, &visible)), vec!["id"]);
    }
}
