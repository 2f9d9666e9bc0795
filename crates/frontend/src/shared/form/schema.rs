//! Declarative field schemas consumed by [`FormFields`](super::FormFields).

use leptos::prelude::*;

use crate::shared::choice::ChoiceOption;

/// How wide a field renders inside the form grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridCols {
    #[default]
    One,
    Two,
}

/// Validation rules attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    pub required: Option<String>,
    pub min_len: Option<(usize, String)>,
    pub email: Option<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: &str) -> Self {
        self.required = Some(message.to_string());
        self
    }

    pub fn min_len(mut self, len: usize, message: &str) -> Self {
        self.min_len = Some((len, message.to_string()));
        self
    }

    pub fn email(mut self, message: &str) -> Self {
        self.email = Some(message.to_string());
        self
    }
}

/// Control rendered for a field. Every variant is handled explicitly;
/// there is no string-keyed fallback.
#[derive(Clone)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Password,
    Date,
    Textarea,
    Checkbox,
    Switch,
    Select { options: Signal<Vec<ChoiceOption>> },
    Radio { options: Vec<ChoiceOption> },
    Autocomplete { suggestions: Signal<Vec<String>> },
}

#[derive(Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub rules: Rules,
    pub disabled: bool,
    pub grid_cols: GridCols,
    /// Fired after the committed value changes through a select-style
    /// control, with the newly committed value.
    pub on_select: Option<Callback<String>>,
}

impl FieldConfig {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            placeholder: None,
            rules: Rules::default(),
            disabled: false,
            grid_cols: GridCols::One,
            on_select: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn half_width(mut self) -> Self {
        self.grid_cols = GridCols::Two;
        self
    }

    pub fn on_select(mut self, callback: Callback<String>) -> Self {
        self.on_select = Some(callback);
        self
    }
}

/// Greedy row pairing: a half-width field pairs with the next field only
/// when that field is also half-width, otherwise it sits alone.
pub fn group_rows(fields: Vec<FieldConfig>) -> Vec<Vec<FieldConfig>> {
    let mut rows = Vec::new();
    let mut iter = fields.into_iter().peekable();
    while let Some(field) = iter.next() {
        let pair_next = field.grid_cols == GridCols::Two
            && iter.peek().is_some_and(|next| next.grid_cols == GridCols::Two);
        if pair_next {
            if let Some(partner) = iter.next() {
                rows.push(vec![field, partner]);
                continue;
            }
        }
        rows.push(vec![field]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, cols: GridCols) -> FieldConfig {
        let mut f = FieldConfig::new(name, name, FieldKind::Text);
        f.grid_cols = cols;
        f
    }

    fn names(rows: &[Vec<FieldConfig>]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|row| row.iter().map(|f| f.name.as_str()).collect())
            .collect()
    }

    #[test]
    fn pairs_adjacent_half_width_fields() {
        let rows = group_rows(vec![
            field("a", GridCols::Two),
            field("b", GridCols::Two),
            field("c", GridCols::One),
        ]);
        assert_eq!(names(&rows), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn half_width_before_full_width_sits_alone() {
        let rows = group_rows(vec![
            field("a", GridCols::Two),
            field("b", GridCols::One),
            field("c", GridCols::Two),
            field("d", GridCols::Two),
        ]);
        assert_eq!(names(&rows), vec![vec!["a"], vec!["b"], vec!["c", "d"]]);
    }

    #[test]
    fn trailing_half_width_sits_alone() {
        let rows = group_rows(vec![field("a", GridCols::One), field("b", GridCols::Two)]);
        assert_eq!(names(&rows), vec![vec!["a"], vec!["b"]]);
    }
}
