// crates/vitrine-app/src/form.rs
// Required-field validation for every form on the page

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};
use vitrine_core::form::submit;
use vitrine_core::{FormConfig, FormSurface};

use crate::dom::{self, Listener};
use crate::error::AppError;

pub fn bind_form_validation(
    document: &Document,
    config: &FormConfig,
) -> Result<Vec<Listener>, AppError> {
    let forms = dom::query_all(document, "form")?;
    let mut listeners = Vec::with_capacity(forms.len());

    for form in forms {
        let target = form.clone();
        let message = config.required_message.clone();
        listeners.push(Listener::new(&form, "submit", move |event| {
            event.prevent_default();
            match DomForm::new(&target) {
                Ok(mut form) => {
                    submit(&mut form, &message);
                }
                Err(e) => log::warn!("Form validation failed: {}", e),
            }
        })?);
    }

    Ok(listeners)
}

/// A form and its required fields, looked up at submit time
struct DomForm {
    form: Element,
    fields: Vec<Element>,
}

impl DomForm {
    fn new(form: &Element) -> Result<Self, AppError> {
        let fields = dom::query_all_in(form, "input[required], textarea[required]")?;
        Ok(Self {
            form: form.clone(),
            fields,
        })
    }

    fn named_slot(&self, name: &str) -> Result<Option<Element>, AppError> {
        let selector = format!(".error[data-field=\"{}\"]", web_sys::css::escape(name));
        Ok(self.form.query_selector(&selector)?)
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

impl FormSurface for DomForm {
    fn clear_errors(&mut self) {
        match dom::query_all_in(&self.form, ".error") {
            Ok(slots) => {
                for slot in slots {
                    slot.set_text_content(Some(""));
                }
            }
            Err(e) => log::warn!("Failed to clear form errors: {}", e),
        }
    }

    fn required_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| (field.get_attribute("name").unwrap_or_default(), field_value(field)))
            .collect()
    }

    fn write_sibling_error(&mut self, index: usize, message: &str) -> bool {
        let slot = self
            .fields
            .get(index)
            .and_then(|field| field.parent_element())
            .and_then(|parent| parent.query_selector(".error").ok().flatten());

        match slot {
            Some(slot) => {
                slot.set_text_content(Some(message));
                true
            }
            None => false,
        }
    }

    fn write_named_error(&mut self, name: &str, message: &str) -> bool {
        match self.named_slot(name) {
            Ok(Some(slot)) => {
                slot.set_text_content(Some(message));
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("Bad error slot lookup for {:?}: {}", name, e);
                false
            }
        }
    }
}
