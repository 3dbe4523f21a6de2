use std::fmt;
use std::time::Duration;

use crate::error::SubmitError;

/// How long the simulated delivery takes before it is acknowledged.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The `name`/`id` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// First empty field, matching what the browser's `required` check blocks on.
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|&field| self.get(field).is_empty())
    }
}

/// Shown once when a submission completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MESSAGE_SENT: Acknowledgement = Acknowledgement {
    title: "Message sent!",
    description: "Thank you for reaching out. I'll get back to you soon.",
};

/// Contact form state with a single-slot submission gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    /// Admits a submission and captures the current values.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] while a previous submission is pending,
    /// [`SubmitError::MissingField`] if any field is empty.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(SubmitError::MissingField(field));
        }
        self.submitting = true;
        Ok(self.draft.clone())
    }

    /// Completes the pending submission: clears every field and reopens the
    /// gate. Returns `None` when nothing was in flight.
    pub fn finish_submit(&mut self) -> Option<Acknowledgement> {
        if !self.submitting {
            return None;
        }
        self.draft = ContactDraft::default();
        self.submitting = false;
        Some(MESSAGE_SENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Ada".to_string());
        form.update(ContactField::Email, "ada@example.com".to_string());
        form.update(ContactField::Subject, "Hello".to_string());
        form.update(ContactField::Message, "Let's build something".to_string());
        form
    }

    #[test]
    fn begin_captures_values_and_closes_gate() {
        let mut form = filled();
        let captured = form.begin_submit().unwrap();

        assert!(form.is_submitting());
        assert_eq!(captured.name, "Ada");
        assert_eq!(captured.message, "Let's build something");
    }

    #[test]
    fn finish_clears_fields_and_reopens_gate() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let ack = form.finish_submit();

        assert_eq!(ack, Some(MESSAGE_SENT));
        assert!(!form.is_submitting());
        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(form.finish_submit(), Some(MESSAGE_SENT));
        assert_eq!(form.finish_submit(), None);
    }

    #[test]
    fn finish_without_begin_does_nothing() {
        let mut form = filled();
        assert_eq!(form.finish_submit(), None);
        assert_eq!(form.value(ContactField::Name), "Ada");
    }

    #[test]
    fn empty_field_blocks_submission() {
        let mut form = filled();
        form.update(ContactField::Subject, String::new());

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::MissingField(ContactField::Subject))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn edits_during_flight_are_cleared_on_completion() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.update(ContactField::Message, "one more thing".to_string());

        form.finish_submit();
        assert_eq!(form.value(ContactField::Message), "");
    }

    #[test]
    fn field_names_match_form_controls() {
        let names: Vec<_> = ContactField::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["name", "email", "subject", "message"]);
    }
}
