use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Subject,
        FormField::Message,
    ];

    /// DOM id, also the label's `for`.
    pub fn id(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone Number",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "John",
            FormField::LastName => "Doe",
            FormField::Email => "john@example.com",
            FormField::Phone => "+91 98765 43210",
            FormField::Subject => "How can we help you?",
            FormField::Message => "Tell us more about your inquiry...",
        }
    }

    /// HTML input type; the message is a textarea.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Phone)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required fields: {}", join(.0))]
    MissingFields(Vec<FormField>),
}

fn join(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::filled_form as filled;

    #[test]
    fn phone_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_reported_in_order() {
        let mut form = filled();
        form.set(FormField::Message, "   \n".into());
        form.set(FormField::FirstName, String::new());

        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec![FormField::FirstName, FormField::Message])
        );
        assert_eq!(err.to_string(), "missing required fields: First Name, Message");
    }

    #[test]
    fn empty_form_misses_everything_but_phone() {
        let missing = ContactForm::default().missing();
        assert_eq!(missing.len(), 5);
        assert!(!missing.contains(&FormField::Phone));
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = filled();
        form.set(FormField::Phone, "+91 90000 00000".into());
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
