// File: src/renderer.rs
// Purpose: Maud rendering of the registration form

use crate::config::Config;
use crate::controller::FormController;
use crate::field::{FieldSpec, InputType};
use crate::registration::TICKET_PLACEHOLDER;
use crate::validation::ValidationError;
use crate::value::FieldValue;
use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "\
.form-group { margin-bottom: 15px; }\
.field-error { color: red; font-size: 0.9em; }\
.success-banner { background-color: #d4edda; color: #155724; padding: 10px; text-align: center; }";

/// Full HTML document with the form
pub fn render_page(form: &FormController, config: &Config) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                title { (config.form.title) }
                style { (STYLE) }
            }
            body {
                (render_form(form, config))
            }
        }
    }
}

/// Heading, banner, every registered field and the submit button
pub fn render_form(form: &FormController, config: &Config) -> Markup {
    html! {
        h1 { (config.form.title) }
        @if form.is_submitted() {
            p.success-banner role="status" { (config.banner.message) }
        }
        form method="post" novalidate {
            @for spec in form.fields() {
                (render_field(spec, form.value(spec.name), form.error(spec.name)))
            }
            button type="submit" { (config.form.submit_label) }
        }
    }
}

/// One labeled input with its inline error
pub fn render_field(spec: &FieldSpec, value: Option<&FieldValue>, error: Option<&ValidationError>) -> Markup {
    let attrs = spec.attrs();
    let text = match (spec.input_type, value) {
        // Passwords are never echoed back
        (InputType::Password, _) | (InputType::Checkbox, _) | (_, None) => None,
        (_, Some(v)) if v.is_empty() => None,
        (_, Some(v)) => Some(v.to_string()),
    };
    let current = text.as_deref().unwrap_or("");

    html! {
        div.form-group {
            @match spec.input_type {
                InputType::Checkbox => {
                    label {
                        input type="checkbox" name=(spec.name) value="true"
                            checked[value.and_then(FieldValue::as_bool).unwrap_or(false)]
                            data-validate=(attrs.data_validate);
                        " " (spec.label)
                    }
                }
                InputType::Select => {
                    label for=(spec.name) { (spec.label) }
                    select id=(spec.name) name=(spec.name) data-validate=(attrs.data_validate) {
                        option value="" { (TICKET_PLACEHOLDER) }
                        @for choice in spec.options {
                            option value=(choice) selected[*choice == current] { (choice) }
                        }
                    }
                }
                _ => {
                    label for=(spec.name) { (spec.label) }
                    input type=(spec.input_type.as_str()) id=(spec.name) name=(spec.name)
                        value=[text.as_deref()]
                        minlength=[attrs.minlength]
                        maxlength=[attrs.maxlength]
                        min=[attrs.min.as_deref()]
                        max=[attrs.max.as_deref()]
                        pattern=[attrs.pattern.as_deref()]
                        data-validate=(attrs.data_validate);
                }
            }
            @if let Some(err) = error {
                p.field-error { (err.message) }
            }
        }
    }
}
