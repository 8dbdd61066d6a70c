use serde::Serialize;

/// What kind of collaboration the visitor is proposing. Never free text;
/// the select control only offers these five options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationType {
    #[default]
    General,
    Mentor,
    Collaboration,
    Sponsorship,
    Media,
}

impl CollaborationType {
    pub const ALL: [CollaborationType; 5] = [
        CollaborationType::General,
        CollaborationType::Mentor,
        CollaborationType::Collaboration,
        CollaborationType::Sponsorship,
        CollaborationType::Media,
    ];

    /// Stable wire/option value, also used in the compose-email subject.
    pub fn value(self) -> &'static str {
        match self {
            CollaborationType::General => "general",
            CollaborationType::Mentor => "mentor",
            CollaborationType::Collaboration => "collaboration",
            CollaborationType::Sponsorship => "sponsorship",
            CollaborationType::Media => "media",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollaborationType::General => "General Inquiry",
            CollaborationType::Mentor => "Mentorship",
            CollaborationType::Collaboration => "Project Collaboration",
            CollaborationType::Sponsorship => "Sponsorship / Funding",
            CollaborationType::Media => "Media / Press",
        }
    }

    /// Maps a select-control value back to the enum. Unknown values fall
    /// back to General rather than erroring; the control can't produce them.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .unwrap_or_default()
    }
}

/// One visitor inquiry, mutated field-by-field while the contact section is
/// on screen. Serialises directly into the relay's `template_params`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "collaborationType")]
    pub collaboration_type: CollaborationType,
}

/// Identifies which input fired a change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    CollaborationType,
}

impl InquiryForm {
    /// Writes exactly one field, leaving the others untouched. No validation
    /// happens here; required-ness is enforced by the input controls.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::CollaborationType => {
                self.collaboration_type = CollaborationType::from_value(&value)
            }
        }
    }
}

/// Outcome banner shown once per submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully!",
            Notice::Failed => "Something went wrong. Please try again.",
        }
    }
}

/// Settlement rule for one submission attempt: success resets the form to
/// its defaults, failure hands it back untouched so the visitor can retry
/// without re-entering anything. All-or-nothing in both directions.
pub fn settle(form: InquiryForm, delivered: bool) -> (InquiryForm, Notice) {
    if delivered {
        (InquiryForm::default(), Notice::Sent)
    } else {
        (form, Notice::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InquiryForm {
        InquiryForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Sponsorship idea".into(),
            message: "Let's talk.".into(),
            collaboration_type: CollaborationType::Sponsorship,
        }
    }

    #[test]
    fn set_writes_only_the_named_field() {
        let mut form = InquiryForm::default();
        form.set(Field::Name, "Jane Doe".into());
        form.set(Field::Email, "jane@example.com".into());
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.subject, "");
        assert_eq!(form.message, "");
        assert_eq!(form.collaboration_type, CollaborationType::General);
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut form = InquiryForm::default();
        form.set(Field::Subject, "Hello".into());
        form.set(Field::Subject, "Hello again".into());
        form.set(Field::Message, "body".into());
        assert_eq!(form.subject, "Hello again");
        assert_eq!(form.message, "body");
    }

    #[test]
    fn collaboration_type_roundtrips_and_rejects_free_text() {
        let mut form = InquiryForm::default();
        form.set(Field::CollaborationType, "sponsorship".into());
        assert_eq!(form.collaboration_type, CollaborationType::Sponsorship);
        form.set(Field::CollaborationType, "anything-else".into());
        assert_eq!(form.collaboration_type, CollaborationType::General);
    }

    #[test]
    fn settle_success_resets_to_defaults() {
        let (form, notice) = settle(filled(), true);
        assert_eq!(form, InquiryForm::default());
        assert_eq!(form.collaboration_type, CollaborationType::General);
        assert_eq!(notice, Notice::Sent);
    }

    #[test]
    fn settle_failure_retains_every_field() {
        let (form, notice) = settle(filled(), false);
        assert_eq!(form, filled());
        assert_eq!(notice, Notice::Failed);
    }
}
