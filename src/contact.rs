//! The contact form. Submissions go nowhere: a fixed delay stands in for
//! the network, then the form reports success and clears itself.

use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Same rule as the inputs' `required` attribute: presence only, so a
    /// whitespace value counts as filled.
    fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmitPhase {
    /// How long the page stays in this phase before
    /// [`ContactFormMachine::advance`] moves it on. `Idle` waits for the user.
    pub fn dwell_ms(self, config: &SiteConfig) -> Option<u64> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Submitting => Some(config.submit_delay_ms),
            SubmitPhase::Success => Some(config.success_banner_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormMachine {
    form: ContactForm,
    phase: SubmitPhase,
}

impl ContactFormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Starts the fake send. Allowed from `Idle` and `Success`.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(ContactError::InFlight);
        }
        if let Some(field) = self.form.first_missing() {
            return Err(ContactError::MissingField(field.name()));
        }
        log::debug!("contact form submitted ({} chars)", self.form.message.len());
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// The fake send finished: show the banner and clear every field.
    pub fn complete(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.form = ContactForm::default();
            self.phase = SubmitPhase::Success;
        }
    }

    /// Hide the success banner.
    pub fn dismiss(&mut self) {
        if self.phase == SubmitPhase::Success {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// The timed transition out of the current phase, fired once its
    /// [`SubmitPhase::dwell_ms`] has elapsed.
    pub fn advance(&mut self) {
        match self.phase {
            SubmitPhase::Submitting => self.complete(),
            SubmitPhase::Success => self.dismiss(),
            SubmitPhase::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;

    fn filled() -> ContactFormMachine {
        let mut machine = ContactFormMachine::new();
        machine.set(Field::Name, "Ada".to_string());
        machine.set(Field::Email, "ada@example.com".to_string());
        machine.set(Field::Subject, "Hello".to_string());
        machine.set(Field::Message, "Let's build something.".to_string());
        machine
    }

    #[test]
    fn test_full_cycle_clears_fields() {
        let mut machine = filled();
        assert_eq!(machine.phase(), SubmitPhase::Idle);

        machine.submit().expect("all fields are filled");
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
        // fields stay put while sending
        assert_eq!(machine.form().name, "Ada");

        machine.complete();
        assert_eq!(machine.phase(), SubmitPhase::Success);
        assert!(machine.form().is_empty());

        machine.dismiss();
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        assert!(machine.form().is_empty());
    }

    #[test]
    fn test_required_fields() {
        let mut machine = filled();
        machine.set(Field::Subject, String::new());
        assert_eq!(machine.submit(), Err(ContactError::MissingField("subject")));
        assert_eq!(machine.phase(), SubmitPhase::Idle);

        let mut empty = ContactFormMachine::new();
        assert_eq!(empty.submit(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        // the browser's `required` check lets this through, so must we
        let mut machine = filled();
        machine.set(Field::Subject, "   ".to_string());
        assert_eq!(machine.submit(), Ok(()));
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut machine = filled();
        machine.submit().expect("first submit");
        assert_eq!(machine.submit(), Err(ContactError::InFlight));
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        let mut machine = filled();
        machine.complete();
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        assert_eq!(machine.form().name, "Ada");

        machine.submit().expect("submit");
        machine.dismiss();
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_resubmit_while_banner_shown() {
        let mut machine = filled();
        machine.submit().expect("submit");
        machine.complete();

        machine.set(Field::Name, "Grace".to_string());
        machine.set(Field::Email, "grace@example.com".to_string());
        machine.set(Field::Subject, "Again".to_string());
        machine.set(Field::Message, "Second message".to_string());
        machine.submit().expect("resubmit from success");
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_timed_cycle() {
        let mut machine = filled();
        machine.submit().expect("submit");

        let mut elapsed = 0;
        let mut seen = vec![(elapsed, machine.phase())];
        while let Some(wait) = machine.phase().dwell_ms(&SITE) {
            elapsed += wait;
            machine.advance();
            seen.push((elapsed, machine.phase()));
        }
        assert_eq!(
            seen,
            [
                (0, SubmitPhase::Submitting),
                (1500, SubmitPhase::Success),
                (4500, SubmitPhase::Idle),
            ]
        );
        assert!(machine.form().is_empty());
    }

    #[test]
    fn test_advance_when_idle_is_noop() {
        let mut machine = filled();
        machine.advance();
        assert_eq!(machine, filled());
        assert_eq!(SubmitPhase::Idle.dwell_ms(&SITE), None);
    }

    #[test]
    fn test_field_names() {
        let form = filled().form().clone();
        let names = Field::ALL.map(Field::name);
        assert_eq!(names, ["name", "email", "subject", "message"]);
        assert_eq!(form.get(Field::Email), "ada@example.com");
    }
}
