// crates/vitrine-core/src/form.rs
// Required-field validation and submit handling

/// A required field's name and current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOutcome {
    /// Indices (into the validated slice) of the fields left blank
    pub missing: Vec<usize>,
}

impl FormOutcome {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Whitespace-only counts as empty
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Check every required field; all of them are checked, not just the first
pub fn validate_required(fields: &[FieldInput<'_>]) -> FormOutcome {
    let missing = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| is_blank(field.value))
        .map(|(index, _)| index)
        .collect();

    FormOutcome { missing }
}

/// The form a submit handler validates
pub trait FormSurface {
    /// Empty every error slot in the form
    fn clear_errors(&mut self);

    /// Name and value of every required field, in document order
    fn required_fields(&self) -> Vec<(String, String)>;

    /// Write into the `.error` next to field `index`; false when it has none
    fn write_sibling_error(&mut self, index: usize, message: &str) -> bool;

    /// Write into the form's `.error[data-field=name]`; false when absent
    fn write_named_error(&mut self, name: &str, message: &str) -> bool;
}

/// Handle one submit attempt. Nothing is sent; a valid form is only logged.
pub fn submit<S: FormSurface>(surface: &mut S, message: &str) -> FormOutcome {
    surface.clear_errors();

    let fields = surface.required_fields();
    let inputs: Vec<FieldInput<'_>> = fields
        .iter()
        .map(|(name, value)| FieldInput { name, value })
        .collect();

    let outcome = validate_required(&inputs);
    for &index in &outcome.missing {
        let name = inputs[index].name;
        if !surface.write_sibling_error(index, message)
            && !surface.write_named_error(name, message)
        {
            log::debug!("Required field {:?} has no error slot", name);
        }
    }

    if outcome.is_valid() {
        log::info!("Form is valid, submitting...");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n\u{feff}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_reports_every_missing_field() {
        let fields = [
            FieldInput { name: "name", value: "Ana" },
            FieldInput { name: "email", value: "  " },
            FieldInput { name: "message", value: "" },
        ];
        let outcome = validate_required(&fields);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.missing, vec![1, 2]);
    }

    #[test]
    fn test_single_empty_field_blocks_submit() {
        let outcome = validate_required(&[FieldInput { name: "email", value: "" }]);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.missing, vec![0]);
    }

    #[test]
    fn test_no_required_fields_is_valid() {
        assert!(validate_required(&[]).is_valid());
    }
}
