//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Free text typed by the user
    Text(String),
    /// A pick from a closed option set, storing the selected option id
    Choice(Option<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Choice(None),
        }
    }

    /// Create a new choice field with an initial selection
    pub fn choice_with_value(name: &str, label: &str, selected: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Choice(Some(selected.to_string())),
        }
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Get the selected option id (returns None for text fields)
    pub fn selected(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Choice(c) => c.as_deref(),
            FieldValue::Text(_) => None,
        }
    }

    /// Select an option
    pub fn select(&mut self, id: &str) {
        self.value = FieldValue::Choice(Some(id.to_string()));
    }

    /// Push a character to the field value (ignored for choice fields)
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(c) => *c = None,
        }
    }

    /// A field is filled when it has text or a selection.
    /// This is the unit every validation gate is built from.
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Choice(c) => c.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("quantity", "Quantity", "e.g., 10 kg");
        assert_eq!(field.as_text(), "");
        assert!(!field.is_filled());
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("quantity", "Quantity", "");
        field.push_char('1');
        field.push_char('0');
        assert_eq!(field.as_text(), "10");
        assert!(field.is_filled());
        field.pop_char();
        assert_eq!(field.as_text(), "1");
        field.clear();
        assert!(!field.is_filled());
    }

    #[test]
    fn test_choice_field_selection() {
        let mut field = FormField::choice("category", "Category");
        assert_eq!(field.selected(), None);
        assert!(!field.is_filled());
        field.select("bread");
        assert_eq!(field.selected(), Some("bread"));
        assert!(field.is_filled());
        field.clear();
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn test_choice_field_ignores_typed_input() {
        let mut field = FormField::choice("category", "Category");
        field.push_char('x');
        assert!(!field.is_filled());
        field.pop_char();
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn test_choice_with_value() {
        let field = FormField::choice_with_value("urgency", "Urgency", "medium");
        assert_eq!(field.selected(), Some("medium"));
    }

    #[test]
    fn test_text_field_has_no_selection() {
        let mut field = FormField::text("address", "Address", "");
        field.push_char('a');
        assert_eq!(field.selected(), None);
    }
}
