//! Submit-time gate for forms relying on native constraint validation.
//!
//! The gate has no rules of its own: it only trusts what the browser reports
//! for the form, custom validity messages included.

use tracing::debug;

use crate::dom::{SubmitControl, ValidatableForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Blocked,
}

pub fn on_submit<F, E>(form: &F, event: &E, validated_class: &str) -> SubmitOutcome
where
    F: ValidatableForm,
    E: SubmitControl,
{
    let outcome = if form.check_validity() {
        SubmitOutcome::Proceed
    } else {
        event.prevent_default();
        event.stop_propagation();
        SubmitOutcome::Blocked
    };
    form.add_class(validated_class);

    debug!(?outcome, "form submit");
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;

    use super::*;
    use crate::consts::VALIDATED_CLASS;

    struct FakeForm {
        valid: bool,
        classes: RefCell<BTreeSet<String>>,
    }

    impl FakeForm {
        fn new(valid: bool) -> Self {
            Self { valid, classes: RefCell::new(BTreeSet::from(["needs-validation".to_owned()])) }
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl ValidatableForm for FakeForm {
        fn check_validity(&self) -> bool {
            self.valid
        }

        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_owned());
        }
    }

    #[derive(Default)]
    struct FakeEvent {
        default_prevented: Cell<bool>,
        propagation_stopped: Cell<bool>,
    }

    impl SubmitControl for FakeEvent {
        fn prevent_default(&self) {
            self.default_prevented.set(true);
        }

        fn stop_propagation(&self) {
            self.propagation_stopped.set(true);
        }
    }

    #[test]
    fn invalid_form_is_blocked_and_marked() {
        let form = FakeForm::new(false);
        let event = FakeEvent::default();

        assert_eq!(on_submit(&form, &event, VALIDATED_CLASS), SubmitOutcome::Blocked);
        assert!(event.default_prevented.get());
        assert!(event.propagation_stopped.get());
        assert!(form.has_class(VALIDATED_CLASS));
    }

    #[test]
    fn valid_form_proceeds_and_is_marked() {
        let form = FakeForm::new(true);
        let event = FakeEvent::default();

        assert_eq!(on_submit(&form, &event, VALIDATED_CLASS), SubmitOutcome::Proceed);
        assert!(!event.default_prevented.get());
        assert!(!event.propagation_stopped.get());
        assert!(form.has_class(VALIDATED_CLASS));
    }

    #[test]
    fn repeated_submits_keep_a_single_marker() {
        let form = FakeForm::new(false);
        for _ in 0..3 {
            on_submit(&form, &FakeEvent::default(), VALIDATED_CLASS);
        }
        assert_eq!(form.classes.borrow().len(), 2);
        assert!(form.has_class("needs-validation"));
    }
}
