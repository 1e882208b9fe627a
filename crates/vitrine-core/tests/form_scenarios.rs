// crates/vitrine-core/tests/form_scenarios.rs
// Submit handling driven through an in-memory form

use std::collections::HashMap;

use vitrine_core::FormSurface;
use vitrine_core::form::submit;

const MESSAGE: &str = "Este campo es obligatorio";

struct Field {
    name: &'static str,
    value: &'static str,
    /// Text of the `.error` next to the field, if it has one
    slot: Option<String>,
}

#[derive(Default)]
struct RecordingForm {
    fields: Vec<Field>,
    /// `.error[data-field=..]` slots keyed by field name
    named: HashMap<&'static str, String>,
    clears: usize,
}

impl RecordingForm {
    fn field(mut self, name: &'static str, value: &'static str, with_slot: bool) -> Self {
        self.fields.push(Field {
            name,
            value,
            slot: with_slot.then(|| "stale".to_string()),
        });
        self
    }

    fn named_slot(mut self, name: &'static str) -> Self {
        self.named.insert(name, "stale".to_string());
        self
    }

    fn slot(&self, index: usize) -> Option<&str> {
        self.fields[index].slot.as_deref()
    }
}

impl FormSurface for RecordingForm {
    fn clear_errors(&mut self) {
        self.clears += 1;
        for field in &mut self.fields {
            if let Some(slot) = field.slot.as_mut() {
                slot.clear();
            }
        }
        for slot in self.named.values_mut() {
            slot.clear();
        }
    }

    fn required_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.value.to_string()))
            .collect()
    }

    fn write_sibling_error(&mut self, index: usize, message: &str) -> bool {
        match self.fields.get_mut(index).and_then(|f| f.slot.as_mut()) {
            Some(slot) => {
                *slot = message.to_string();
                true
            }
            None => false,
        }
    }

    fn write_named_error(&mut self, name: &str, message: &str) -> bool {
        match self.named.get_mut(name) {
            Some(slot) => {
                *slot = message.to_string();
                true
            }
            None => false,
        }
    }
}

#[test]
fn test_single_empty_required_field() {
    let mut form = RecordingForm::default().field("email", "", true);

    let outcome = submit(&mut form, MESSAGE);

    assert!(!outcome.is_valid());
    assert_eq!(outcome.missing, vec![0]);
    assert_eq!(form.slot(0), Some(MESSAGE));
}

#[test]
fn test_sibling_slot_wins_over_named_slot() {
    let mut form = RecordingForm::default()
        .field("email", "  ", true)
        .named_slot("email");

    submit(&mut form, MESSAGE);

    assert_eq!(form.slot(0), Some(MESSAGE));
    assert_eq!(form.named["email"], "");
}

#[test]
fn test_named_slot_used_without_sibling() {
    let mut form = RecordingForm::default()
        .field("name", "Ana", true)
        .field("message", "\n\t", false)
        .named_slot("message");

    let outcome = submit(&mut form, MESSAGE);

    assert_eq!(outcome.missing, vec![1]);
    assert_eq!(form.named["message"], MESSAGE);
    // The filled field's stale message is cleared, not rewritten
    assert_eq!(form.slot(0), Some(""));
}

#[test]
fn test_missing_slot_still_invalid() {
    let mut form = RecordingForm::default()
        .field("phone", "", false)
        .field("email", "", true);

    let outcome = submit(&mut form, MESSAGE);

    assert!(!outcome.is_valid());
    assert_eq!(outcome.missing, vec![0, 1]);
    // The field without a slot doesn't stop the next one getting its message
    assert_eq!(form.slot(1), Some(MESSAGE));
}

#[test]
fn test_valid_form_clears_previous_errors() {
    let mut form = RecordingForm::default().field("email", "", true);
    submit(&mut form, MESSAGE);

    form.fields[0].value = "ana@example.com";
    let outcome = submit(&mut form, MESSAGE);

    assert!(outcome.is_valid());
    assert_eq!(form.slot(0), Some(""));
    assert_eq!(form.clears, 2);
}
