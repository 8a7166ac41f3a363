//! Contact-form state machine.
//!
//! Pure and synchronous: [`FormModel::update`] consumes one [`Msg`] and
//! returns the [`Effect`]s to run. Rendering and effect execution belong to
//! the embedder (see [`crate::client::driver`]).

use std::time::Duration;

use crate::domain::{Field, Submission};

/// How long a notice stays on screen before dismissing itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

const SUCCESS_TEXT: &str = "Thank you for your message! I'll get back to you soon.";
const FAILURE_TEXT: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Exactly one network call is outstanding; further submits are no-ops.
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissable banner. The generation token ties auto-dismiss timers to
/// the notice they were scheduled for, so a stale timer cannot clear a
/// newer notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A field's value changed.
    Edited(Field, String),
    /// Focus left a field.
    Blurred(Field),
    /// The visitor asked to submit.
    SubmitPressed,
    /// The relay accepted the submission.
    Delivered,
    /// The relay rejected the submission or was unreachable.
    Failed,
    /// The visitor dismissed the notice by hand.
    DismissPressed,
    /// An auto-dismiss timer fired for the given notice generation.
    DismissElapsed(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the network request. Emitted at most once per in-flight cycle.
    Submit(Submission),
    /// Arrange for `Msg::DismissElapsed(generation)` after the delay.
    ScheduleDismiss { generation: u64, after: Duration },
}

#[derive(Debug, Default)]
pub struct FormModel {
    name: String,
    email: String,
    message: String,
    name_status: FieldStatus,
    email_status: FieldStatus,
    message_status: FieldStatus,
    phase: Phase,
    notice: Option<Notice>,
    generation: u64,
}

impl FormModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one message through the machine.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Edited(field, value) => {
                *self.value_mut(field) = value;
                // Re-check immediately only once the field has been flagged,
                // so the visitor sees the error clear as they type.
                if self.status(field) == FieldStatus::Invalid {
                    self.validate_field(field);
                }
                Vec::new()
            }
            Msg::Blurred(field) => {
                self.validate_field(field);
                Vec::new()
            }
            Msg::SubmitPressed => self.submit(),
            Msg::Delivered => {
                self.phase = Phase::Idle;
                self.clear_fields();
                self.show(NoticeKind::Success, SUCCESS_TEXT.to_owned())
            }
            Msg::Failed => {
                // Field contents survive so the visitor can retry as-is.
                self.phase = Phase::Idle;
                self.show(NoticeKind::Error, FAILURE_TEXT.to_owned())
            }
            Msg::DismissPressed => {
                self.notice = None;
                Vec::new()
            }
            Msg::DismissElapsed(generation) => {
                if self.notice.as_ref().is_some_and(|n| n.generation == generation) {
                    self.notice = None;
                }
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.phase == Phase::Sending {
            return Vec::new();
        }

        match Submission::parse(&self.name, &self.email, &self.message) {
            Ok(submission) => {
                self.phase = Phase::Sending;
                self.name_status = FieldStatus::Valid;
                self.email_status = FieldStatus::Valid;
                self.message_status = FieldStatus::Valid;
                vec![Effect::Submit(submission)]
            }
            Err(violations) => {
                for field in [Field::Name, Field::Email, Field::Message] {
                    if violations.contains(field) {
                        *self.status_mut(field) = FieldStatus::Invalid;
                    }
                }
                self.show(NoticeKind::Error, violations.to_string())
            }
        }
    }

    fn show(&mut self, kind: NoticeKind, text: String) -> Vec<Effect> {
        self.generation += 1;
        let generation = self.generation;
        self.notice = Some(Notice { kind, text, generation });
        vec![Effect::ScheduleDismiss { generation, after: NOTICE_TTL }]
    }

    fn validate_field(&mut self, field: Field) {
        *self.status_mut(field) = match field.validate(self.value(field)) {
            Ok(()) => FieldStatus::Valid,
            Err(_) => FieldStatus::Invalid,
        };
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.name_status = FieldStatus::Unchecked;
        self.email_status = FieldStatus::Unchecked;
        self.message_status = FieldStatus::Unchecked;
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn status_mut(&mut self, field: Field) -> &mut FieldStatus {
        match field {
            Field::Name => &mut self.name_status,
            Field::Email => &mut self.email_status,
            Field::Message => &mut self.message_status,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::Name => self.name_status,
            Field::Email => self.email_status,
            Field::Message => self.message_status,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the submit control should be disabled.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending)
    }

    /// Label for the submit control, swapped to a busy indicator while a
    /// request is outstanding.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Send Message",
            Phase::Sending => "Sending...",
        }
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_model() -> FormModel {
        let mut model = FormModel::new();
        let _ = model.update(Msg::Edited(Field::Name, "Jo".into()));
        let _ = model.update(Msg::Edited(Field::Email, "jo@example.com".into()));
        let _ = model.update(Msg::Edited(Field::Message, "Hello, this is a test message.".into()));
        model
    }

    fn dismiss_generation(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::ScheduleDismiss { generation, .. }] => *generation,
            other => panic!("expected a single dismiss effect, got {other:?}"),
        }
    }

    #[test]
    fn valid_submit_emits_exactly_one_request() {
        let mut model = filled_model();

        let effects = model.update(Msg::SubmitPressed);

        match effects.as_slice() {
            [Effect::Submit(submission)] => {
                assert_eq!(submission.name(), "Jo");
                assert_eq!(submission.email(), "jo@example.com");
                assert_eq!(submission.message(), "Hello, this is a test message.");
            }
            other => panic!("expected a single submit effect, got {other:?}"),
        }
        assert_eq!(model.phase(), Phase::Sending);
        assert!(model.is_sending());
        assert_eq!(model.submit_label(), "Sending...");
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);

        let effects = model.update(Msg::SubmitPressed);

        assert!(effects.is_empty(), "no additional network call may be issued");
        assert_eq!(model.phase(), Phase::Sending);
    }

    #[test]
    fn invalid_submit_lists_every_failing_rule_and_stays_off_the_network() {
        let mut model = FormModel::new();
        let _ = model.update(Msg::Edited(Field::Name, "J".into()));
        let _ = model.update(Msg::Edited(Field::Email, "not-an-email".into()));
        let _ = model.update(Msg::Edited(Field::Message, "short".into()));

        let effects = model.update(Msg::SubmitPressed);

        assert!(!effects.iter().any(|e| matches!(e, Effect::Submit(_))));
        assert_eq!(model.phase(), Phase::Idle);
        let notice = model.notice().expect("an error notice should be shown");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("valid name"));
        assert!(notice.text.contains("valid email"));
        assert!(notice.text.contains("at least 10 characters"));
        assert_eq!(model.status(Field::Name), FieldStatus::Invalid);
        assert_eq!(model.status(Field::Email), FieldStatus::Invalid);
        assert_eq!(model.status(Field::Message), FieldStatus::Invalid);
    }

    #[test]
    fn delivery_clears_the_form_and_shows_a_success_notice() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);

        let effects = model.update(Msg::Delivered);

        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.value(Field::Name), "");
        assert_eq!(model.value(Field::Email), "");
        assert_eq!(model.value(Field::Message), "");
        let notice = model.notice().expect("a success notice should be shown");
        assert_eq!(notice.kind, NoticeKind::Success);
        match effects.as_slice() {
            [Effect::ScheduleDismiss { after, .. }] => assert_eq!(*after, NOTICE_TTL),
            other => panic!("expected a single dismiss effect, got {other:?}"),
        }
    }

    #[test]
    fn failure_preserves_the_form_and_shows_an_error_notice() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);

        let _ = model.update(Msg::Failed);

        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.value(Field::Name), "Jo");
        assert_eq!(model.value(Field::Email), "jo@example.com");
        assert_eq!(model.value(Field::Message), "Hello, this is a test message.");
        let notice = model.notice().expect("an error notice should be shown");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn failure_then_resubmit_issues_a_fresh_request() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);
        let _ = model.update(Msg::Failed);

        let effects = model.update(Msg::SubmitPressed);

        assert!(matches!(effects.as_slice(), [Effect::Submit(_)]));
    }

    #[test]
    fn manual_dismiss_clears_the_notice() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);
        let _ = model.update(Msg::Delivered);

        let _ = model.update(Msg::DismissPressed);

        assert!(model.notice().is_none());
    }

    #[test]
    fn timed_dismiss_clears_the_notice_it_was_scheduled_for() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);
        let generation = dismiss_generation(&model.update(Msg::Delivered));

        let _ = model.update(Msg::DismissElapsed(generation));

        assert!(model.notice().is_none());
    }

    #[test]
    fn stale_dismiss_timer_leaves_a_newer_notice_alone() {
        let mut model = filled_model();
        let _ = model.update(Msg::SubmitPressed);
        let stale = dismiss_generation(&model.update(Msg::Failed));

        // A retry fails again, replacing the notice before the first timer
        // fires.
        let _ = model.update(Msg::SubmitPressed);
        let _ = model.update(Msg::Failed);

        let _ = model.update(Msg::DismissElapsed(stale));

        assert!(model.notice().is_some(), "the newer notice must survive the stale timer");
    }

    #[test]
    fn blur_validates_just_that_field() {
        let mut model = FormModel::new();
        let _ = model.update(Msg::Edited(Field::Email, "nope".into()));

        let _ = model.update(Msg::Blurred(Field::Email));

        assert_eq!(model.status(Field::Email), FieldStatus::Invalid);
        assert_eq!(model.status(Field::Name), FieldStatus::Unchecked);
        assert_eq!(model.status(Field::Message), FieldStatus::Unchecked);
    }

    #[test]
    fn editing_a_flagged_field_revalidates_it_immediately() {
        let mut model = FormModel::new();
        let _ = model.update(Msg::Edited(Field::Email, "nope".into()));
        let _ = model.update(Msg::Blurred(Field::Email));
        assert_eq!(model.status(Field::Email), FieldStatus::Invalid);

        let _ = model.update(Msg::Edited(Field::Email, "jo@example.com".into()));

        assert_eq!(model.status(Field::Email), FieldStatus::Valid);
    }

    #[test]
    fn editing_an_unflagged_field_defers_validation_to_blur() {
        let mut model = FormModel::new();

        let _ = model.update(Msg::Edited(Field::Email, "nope".into()));

        assert_eq!(model.status(Field::Email), FieldStatus::Unchecked);
    }
}
