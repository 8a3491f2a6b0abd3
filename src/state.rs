use serde::{Deserialize, Serialize};

use crate::contact::{ContactForm, Field, Ticket};
use crate::sections::{ActiveView, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub view: ActiveView,
    pub contact: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Section),
    Edit(Field, String),
    Submit,
    Settle(Ticket),
    Teardown,
}

/// Side effect the caller carries out after [`PageState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    Nothing,
    /// Restarts the success timer for `ticket`.
    OpenMail { href: String, ticket: Ticket },
    CancelTimer,
}

impl PageState {
    pub fn new(sections: &[Section], recipient: impl Into<String>) -> Self {
        Self {
            view: ActiveView::new(sections),
            contact: ContactForm::new(recipient),
        }
    }

    pub fn apply(&mut self, action: Action) -> Followup {
        match action {
            Action::SelectTab(section) => {
                self.view.select(section);
                Followup::Nothing
            }
            Action::Edit(field, value) => {
                self.contact.edit(field, value);
                Followup::Nothing
            }
            Action::Submit => match self.contact.submit() {
                Ok(dispatch) => Followup::OpenMail {
                    href: dispatch.target.href(),
                    ticket: dispatch.ticket,
                },
                Err(_) => Followup::CancelTimer,
            },
            Action::Settle(ticket) => {
                self.contact.settle(ticket);
                Followup::Nothing
            }
            Action::Teardown => match self.contact.cancel() {
                Some(_) => Followup::CancelTimer,
                None => Followup::Nothing,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormStatus;

    fn state() -> PageState {
        PageState::new(
            &[Section::About, Section::Projects, Section::Contact],
            "me@example.com",
        )
    }

    #[test]
    fn test_tab_selection() {
        let mut state = state();
        assert_eq!(state.view.current(), Section::About);
        assert_eq!(
            state.apply(Action::SelectTab(Section::Contact)),
            Followup::Nothing
        );
        assert_eq!(state.view.current(), Section::Contact);
    }

    #[test]
    fn test_submit_flow() {
        let mut state = state();
        assert_eq!(state.apply(Action::Submit), Followup::CancelTimer);
        assert_eq!(state.contact.status(), FormStatus::ValidationError);

        state.apply(Action::Edit(Field::Name, "Ada".to_string()));
        state.apply(Action::Edit(Field::Email, "ada@example.com".to_string()));
        state.apply(Action::Edit(Field::Message, "Hello".to_string()));

        let ticket = match state.apply(Action::Submit) {
            Followup::OpenMail { href, ticket } => {
                assert!(href.starts_with("mailto:me@example.com?subject=Contact%20from%20Ada&body="));
                ticket
            }
            other => panic!("expected mail followup, got {other:?}"),
        };
        assert_eq!(state.contact.status(), FormStatus::Submitting);

        state.apply(Action::Settle(ticket));
        assert_eq!(state.contact.status(), FormStatus::Success);
        assert!(state.contact.draft().name.is_empty());
        assert!(state.contact.draft().email.is_empty());
        assert!(state.contact.draft().message.is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending() {
        let mut state = state();
        assert_eq!(state.apply(Action::Teardown), Followup::Nothing);

        state.apply(Action::Edit(Field::Name, "Ada".to_string()));
        state.apply(Action::Edit(Field::Email, "ada@example.com".to_string()));
        state.apply(Action::Edit(Field::Message, "Hello".to_string()));
        let Followup::OpenMail { ticket, .. } = state.apply(Action::Submit) else {
            panic!("submit should open mail");
        };
        assert_eq!(state.apply(Action::Teardown), Followup::CancelTimer);
        state.apply(Action::Settle(ticket));
        assert_eq!(state.contact.status(), FormStatus::Submitting);
        assert_eq!(state.contact.draft().name, "Ada");
    }

    #[test]
    fn test_state_serializes() {
        let mut state = state();
        state.apply(Action::SelectTab(Section::Projects));
        let json = serde_json::to_string(&state).unwrap();
        let back: PageState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
