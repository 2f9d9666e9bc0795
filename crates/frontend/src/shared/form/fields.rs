use leptos::prelude::*;

use crate::shared::components::ui::{
    CheckboxInput, DateInput, Input, RadioGroupInput, SelectInput, SwitchInput, Textarea,
};

use super::autocomplete::AutocompleteInput;
use super::schema::{group_rows, FieldConfig, FieldKind};
use super::state::FormState;

/// Renders a schema of fields against shared [`FormState`], pairing
/// half-width fields into two-column rows.
#[component]
pub fn FormFields(state: FormState, fields: Vec<FieldConfig>) -> impl IntoView {
    view! {
        <div class="form__rows">
            {group_rows(fields)
                .into_iter()
                .map(|row| {
                    let class = if row.len() == 2 {
                        "form__row form__row--split"
                    } else {
                        "form__row"
                    };
                    view! {
                        <div class=class>
                            {row
                                .into_iter()
                                .map(|field| render_field(state, field))
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn field_label(field: &FieldConfig) -> AnyView {
    let required = field.rules.required.is_some();
    view! {
        <label class="form__label" for=field.name.clone()>
            {field.label.clone()}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
    .into_any()
}

fn field_error(state: FormState, name: String) -> AnyView {
    view! {
        {move || {
            state
                .error_at(&name)
                .map(|message| view! { <p class="form__error">{message}</p> })
        }}
    }
    .into_any()
}

fn commit_string(state: FormState, name: String, on_select: Option<Callback<String>>) -> Callback<String> {
    Callback::new(move |value: String| {
        state.set_string(&name, value.clone());
        if let Some(cb) = on_select {
            cb.run(value);
        }
    })
}

pub fn render_field(state: FormState, field: FieldConfig) -> AnyView {
    let name = field.name.clone();
    let value = {
        let name = name.clone();
        Signal::derive(move || state.string_value(&name))
    };
    let label = field_label(&field);
    let error = field_error(state, name.clone());
    let disabled = field.disabled;
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let id = name.clone();
    let input_type = match field.kind {
        FieldKind::Number => "number",
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        _ => "text",
    };

    match field.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Email | FieldKind::Password => {
            let on_input = commit_string(state, name, None);
            view! {
                <div class="form__field">
                    {label}
                    <Input
                        id=id
                        value=value
                        input_type=input_type.to_string()
                        placeholder=placeholder
                        disabled=disabled
                        on_input=on_input
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Date => {
            let on_change = commit_string(state, name, None);
            view! {
                <div class="form__field">
                    {label}
                    <DateInput id=id value=value disabled=disabled on_change=on_change />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Textarea => {
            let on_input = commit_string(state, name, None);
            view! {
                <div class="form__field">
                    {label}
                    <Textarea
                        id=id
                        value=value
                        placeholder=placeholder
                        disabled=disabled
                        on_input=on_input
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Checkbox => {
            let checked = {
                let name = name.clone();
                Signal::derive(move || state.bool_value(&name))
            };
            let on_change = Callback::new(move |checked: bool| {
                state.set_bool(&name, checked);
            });
            view! {
                <div class="form__field form__field--inline">
                    <CheckboxInput
                        id=id
                        checked=checked
                        label=field.label.clone()
                        disabled=disabled
                        on_change=on_change
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Switch => {
            let checked = {
                let name = name.clone();
                Signal::derive(move || state.bool_value(&name))
            };
            let on_change = Callback::new(move |checked: bool| {
                state.set_bool(&name, checked);
            });
            view! {
                <div class="form__field form__field--inline">
                    <SwitchInput
                        id=id
                        checked=checked
                        label=field.label.clone()
                        disabled=disabled
                        on_change=on_change
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Select { options } => {
            let on_change = commit_string(state, name, field.on_select);
            view! {
                <div class="form__field">
                    {label}
                    <SelectInput
                        id=id
                        value=value
                        options=options
                        placeholder=placeholder
                        disabled=disabled
                        on_change=on_change
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Radio { options } => {
            let on_change = commit_string(state, name, field.on_select);
            view! {
                <div class="form__field">
                    {label}
                    <RadioGroupInput
                        name=id
                        options=options
                        value=value
                        disabled=disabled
                        on_change=on_change
                    />
                    {error}
                </div>
            }
            .into_any()
        }
        FieldKind::Autocomplete { suggestions } => {
            let on_commit = commit_string(state, name, field.on_select);
            view! {
                <div class="form__field">
                    {label}
                    <AutocompleteInput
                        id=id
                        value=value
                        suggestions=suggestions
                        placeholder=placeholder
                        disabled=disabled
                        on_commit=on_commit
                    />
                    {error}
                </div>
            }
            .into_any()
        }
    }
}
