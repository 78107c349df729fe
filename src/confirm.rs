//! Yes/no confirmation gate for destructive actions.
//!
//! Cancelling an appointment and logging out must be confirmed by the user.
//! The gate is a synchronous question returning a boolean; transports
//! decide how the answer is obtained.

pub const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";

pub fn cancel_appointment_prompt(center_name: &str) -> String {
    format!("Are you sure you want to cancel your appointment at {center_name}?")
}

/// Asks the user a yes/no question.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A confirmation whose answer is known up front (request flag, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Answer {
    pub const YES: Answer = Answer(true);
    pub const NO: Answer = Answer(false);
}

impl Confirmation for Answer {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "Confirmation answered");
        self.0
    }
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn fixed_answers() {
        assert!(Answer::YES.confirm(LOGOUT_PROMPT));
        assert!(!Answer::NO.confirm(LOGOUT_PROMPT));
    }

    #[test]
    fn closures_see_the_prompt() {
        let seen = RefCell::new(String::new());
        let gate = |prompt: &str| {
            *seen.borrow_mut() = prompt.to_string();
            false
        };
        assert!(!gate.confirm(&cancel_appointment_prompt("Metro Hospital")));
        assert_eq!(
            seen.borrow().as_str(),
            "Are you sure you want to cancel your appointment at Metro Hospital?"
        );
    }
}
