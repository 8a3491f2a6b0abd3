use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const SUCCESS_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    #[default]
    Empty,
    ValidationError,
    Submitting,
    Success,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::ValidationError => "Please fill in all fields.",
            Self::Submitting => "Opening your email client...",
            Self::Success => "Thank you! I'll get back to you soon.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::ValidationError)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    IncompleteSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn compose(recipient: &str, draft: &ContactDraft) -> Result<Self, ContactError> {
        if !draft.is_complete() {
            return Err(ContactError::IncompleteSubmission);
        }
        Ok(Self {
            recipient: recipient.to_string(),
            subject: format!("Contact from {}", draft.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                draft.name, draft.email, draft.message
            ),
        })
    }

    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub target: MailtoLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    recipient: String,
    draft: ContactDraft,
    status: FormStatus,
    pending: Option<Ticket>,
    issued: u64,
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            draft: ContactDraft::default(),
            status: FormStatus::Empty,
            pending: None,
            issued: 0,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Supersedes any pending submission, complete or not.
    pub fn submit(&mut self) -> Result<Dispatch, ContactError> {
        if let Some(stale) = self.pending.take() {
            log::debug!("contact submission {stale:?} superseded");
        }
        match MailtoLink::compose(&self.recipient, &self.draft) {
            Ok(target) => {
                self.issued += 1;
                let ticket = Ticket(self.issued);
                self.pending = Some(ticket);
                self.status = FormStatus::Submitting;
                log::debug!("contact submission {ticket:?} dispatched");
                Ok(Dispatch { ticket, target })
            }
            Err(e) => {
                self.status = FormStatus::ValidationError;
                Err(e)
            }
        }
    }

    /// Returns false for stale or cancelled tickets.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending != Some(ticket) {
            log::debug!("ignoring stale contact submission {ticket:?}");
            return false;
        }
        self.pending = None;
        self.status = FormStatus::Success;
        self.draft.clear();
        true
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        let cancelled = self.pending.take();
        if let Some(ticket) = cancelled {
            log::debug!("contact submission {ticket:?} cancelled");
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "manishneupane0909@gmail.com";

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new(RECIPIENT);
        form.edit(Field::Name, name.to_string());
        form.edit(Field::Email, email.to_string());
        form.edit(Field::Message, message.to_string());
        form
    }

    fn query_param(href: &str, key: &str) -> String {
        let (_, query) = href.split_once('?').expect("mailto should have a query");
        let raw = query
            .split('&')
            .find_map(|kv| kv.strip_prefix(&format!("{key}=")))
            .unwrap_or_else(|| panic!("missing {key} in {href}"));
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn test_incomplete_submission() {
        let cases = [
            ("", "ada@example.com", "Hello"),
            ("Ada", "", "Hello"),
            ("Ada", "ada@example.com", ""),
            ("   ", "ada@example.com", "Hello"),
            ("Ada", "ada@example.com", "\n\t "),
        ];
        for (name, email, message) in cases {
            let mut form = filled(name, email, message);
            let res = form.submit();
            assert_eq!(res, Err(ContactError::IncompleteSubmission));
            assert_eq!(form.status(), FormStatus::ValidationError);
            assert_eq!(form.status().message(), "Please fill in all fields.");
            assert_eq!(form.pending(), None);
            // draft is kept so the user can fix it
            assert_eq!(form.draft().get(Field::Email), email);
        }
        assert_eq!(
            ContactError::IncompleteSubmission.to_string(),
            "Please fill in all fields."
        );
    }

    #[test]
    fn test_mailto_encoding() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        let Dispatch { target, .. } = form.submit().unwrap();
        let href = target.href();

        assert!(href.starts_with(&format!("mailto:{RECIPIENT}?subject=")));
        assert_eq!(query_param(&href, "subject"), "Contact from Ada");
        assert_eq!(
            query_param(&href, "body"),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello"
        );
        assert!(href.contains("subject=Contact%20from%20Ada"));
        assert!(href.contains("%0A%0AMessage%3A%0AHello"));
        assert_eq!(target.to_string(), href);
    }

    #[test]
    fn test_special_characters_survive_encoding() {
        let draft = ContactDraft {
            name: "Zoë & Co".to_string(),
            email: "z+tag@example.com".to_string(),
            message: "a=b?c#d 100%".to_string(),
        };
        let href = MailtoLink::compose(RECIPIENT, &draft).unwrap().href();
        assert_eq!(query_param(&href, "subject"), "Contact from Zoë & Co");
        assert!(query_param(&href, "body").ends_with("a=b?c#d 100%"));
    }

    #[test]
    fn test_submit_then_settle() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        assert_eq!(form.status(), FormStatus::Empty);

        let dispatch = form.submit().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(form.status().message(), "Opening your email client...");
        assert_eq!(form.pending(), Some(dispatch.ticket));
        assert_eq!(form.draft().name, "Ada");

        assert!(form.settle(dispatch.ticket));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(
            form.status().message(),
            "Thank you! I'll get back to you soon."
        );
        assert_eq!(*form.draft(), ContactDraft::default());
        assert_eq!(form.pending(), None);

        // settling twice does nothing
        assert!(!form.settle(dispatch.ticket));
    }

    #[test]
    fn test_resubmit_supersedes_pending() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        let first = form.submit().unwrap();

        form.edit(Field::Message, "Hello again".to_string());
        let second = form.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(second.target.body.ends_with("Hello again"));

        // first timer firing late must not clear the draft
        assert!(!form.settle(first.ticket));
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(form.draft().message, "Hello again");

        assert!(form.settle(second.ticket));
        assert!(form.draft().message.is_empty());
    }

    #[test]
    fn test_invalid_resubmit_cancels_pending() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        let first = form.submit().unwrap();
        form.edit(Field::Name, String::new());
        assert!(form.submit().is_err());
        assert!(!form.settle(first.ticket));
        assert_eq!(form.status(), FormStatus::ValidationError);
        assert_eq!(form.draft().email, "ada@example.com");
    }

    #[test]
    fn test_cancel() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        assert_eq!(form.cancel(), None);
        let dispatch = form.submit().unwrap();
        assert_eq!(form.cancel(), Some(dispatch.ticket));
        assert!(!form.settle(dispatch.ticket));
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_edit_keeps_status() {
        let mut form = ContactForm::new(RECIPIENT);
        let _ = form.submit();
        form.edit(Field::Name, "A".to_string());
        assert_eq!(form.status(), FormStatus::ValidationError);
        assert_eq!(form.recipient(), RECIPIENT);
    }
}
