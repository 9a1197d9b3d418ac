//! # OTP entry — declarative six-digit input
//!
//! [`OtpCode`] is the whole state of the OTP widget: six digit slots plus
//! the index of the slot that should hold focus. Entering a digit advances
//! the index, backspace retreats it, and the component only *applies* the
//! index to the DOM (via the mounted handles) — no element queries, so the
//! state is fully testable off-screen.
//!
//! [`OtpCode::code`] returns `Some` only when all six digits are present;
//! callers gate the network call on that, which is what keeps short codes
//! from ever leaving the client.

use std::rc::Rc;

use dioxus::prelude::*;

pub use api::OTP_LEN;

/// State of the six-digit OTP widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtpCode {
    digits: [Option<char>; OTP_LEN],
    active: usize,
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that should currently hold focus.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn digit(&self, slot: usize) -> Option<char> {
        self.digits.get(slot).copied().flatten()
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.digits.iter().filter(|digit| digit.is_some()).count()
    }

    /// The complete code, only once all six digits are present.
    pub fn code(&self) -> Option<String> {
        if self.filled() == OTP_LEN {
            Some(self.digits.iter().flatten().collect())
        } else {
            None
        }
    }

    /// Apply raw input to a slot. The last digit typed wins; non-digit
    /// input clears the slot. Entering a digit advances the focus index.
    pub fn enter(&mut self, slot: usize, value: &str) {
        if slot >= OTP_LEN {
            return;
        }
        match value.chars().rev().find(|c| c.is_ascii_digit()) {
            Some(digit) => {
                self.digits[slot] = Some(digit);
                self.active = (slot + 1).min(OTP_LEN - 1);
            }
            None => {
                self.digits[slot] = None;
                self.active = slot;
            }
        }
    }

    /// Backspace in a slot: clear it, or step back onto the previous slot
    /// when already empty.
    pub fn backspace(&mut self, slot: usize) {
        if slot >= OTP_LEN {
            return;
        }
        if self.digits[slot].is_some() {
            self.digits[slot] = None;
            self.active = slot;
        } else if slot > 0 {
            self.digits[slot - 1] = None;
            self.active = slot - 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Six single-digit boxes bound to an [`OtpCode`] signal.
#[component]
pub fn OtpInput(mut code: Signal<OtpCode>, #[props(default = false)] disabled: bool) -> Element {
    let mut mounted: Signal<Vec<Option<Rc<MountedData>>>> =
        use_signal(|| vec![None; OTP_LEN]);

    // Apply the focus index to the DOM whenever it moves.
    use_effect(move || {
        let active = code.read().active();
        if let Some(field) = mounted.read().get(active).and_then(|f| f.clone()) {
            spawn(async move {
                let _ = field.set_focus(true).await;
            });
        }
    });

    rsx! {
        div {
            class: "otp-row",
            for slot in 0..OTP_LEN {
                input {
                    key: "{slot}",
                    class: "otp-digit",
                    r#type: "text",
                    inputmode: "numeric",
                    autocomplete: "one-time-code",
                    maxlength: "1",
                    disabled,
                    value: code.read().digit(slot).map(String::from).unwrap_or_default(),
                    onmounted: move |evt| {
                        mounted.write()[slot] = Some(evt.data());
                    },
                    oninput: move |evt| {
                        code.write().enter(slot, &evt.value());
                    },
                    onkeydown: move |evt| {
                        if evt.key() == Key::Backspace {
                            code.write().backspace(slot);
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_digits_advances_the_focus_index() {
        let mut code = OtpCode::new();
        code.enter(0, "4");
        assert_eq!(code.active(), 1);
        code.enter(1, "2");
        assert_eq!(code.active(), 2);
        assert_eq!(code.filled(), 2);
    }

    #[test]
    fn the_code_is_withheld_until_all_six_digits_exist() {
        let mut code = OtpCode::new();
        for (slot, digit) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            code.enter(slot, digit);
            assert_eq!(code.code(), None);
        }
        code.enter(5, "6");
        assert_eq!(code.code().as_deref(), Some("123456"));
    }

    #[test]
    fn non_digit_input_clears_the_slot() {
        let mut code = OtpCode::new();
        code.enter(0, "7");
        code.enter(0, "x");
        assert_eq!(code.digit(0), None);
        assert_eq!(code.active(), 0);
    }

    #[test]
    fn pasted_text_keeps_the_last_digit() {
        let mut code = OtpCode::new();
        code.enter(0, "12");
        assert_eq!(code.digit(0), Some('2'));
    }

    #[test]
    fn backspace_clears_then_steps_back() {
        let mut code = OtpCode::new();
        code.enter(0, "1");
        code.enter(1, "2");

        // Backspace in an empty slot clears the previous one.
        code.backspace(2);
        assert_eq!(code.digit(1), None);
        assert_eq!(code.active(), 1);

        // Backspace in a filled slot clears it in place.
        code.enter(1, "3");
        code.backspace(1);
        assert_eq!(code.digit(1), None);
        assert_eq!(code.active(), 1);

        code.backspace(1);
        assert_eq!(code.digit(0), None);
        assert_eq!(code.active(), 0);

        // At the first slot backspace has nowhere left to go.
        code.backspace(0);
        assert_eq!(code.active(), 0);
    }

    #[test]
    fn focus_never_advances_past_the_last_slot() {
        let mut code = OtpCode::new();
        for slot in 0..OTP_LEN {
            code.enter(slot, "9");
        }
        assert_eq!(code.active(), OTP_LEN - 1);
        assert!(code.code().is_some());
    }

    #[test]
    fn reset_discards_digits_and_focus() {
        let mut code = OtpCode::new();
        code.enter(0, "1");
        code.enter(1, "2");
        code.reset();
        assert_eq!(code, OtpCode::new());
    }
}
