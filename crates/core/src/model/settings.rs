use serde::{Deserialize, Serialize};

/// How the player submits answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Three multiple-choice buttons.
    #[default]
    Buttons,
    /// A digits-only text field with a check button.
    Typing,
}

/// Menu-selected presentation options. Not persisted across launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    input_mode: InputMode,
    show_fingers: bool,
    show_dots: bool,
}

impl GameSettings {
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn show_fingers(&self) -> bool {
        self.show_fingers
    }

    #[must_use]
    pub fn show_dots(&self) -> bool {
        self.show_dots
    }

    #[must_use]
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    #[must_use]
    pub fn with_fingers_toggled(mut self) -> Self {
        self.show_fingers = !self.show_fingers;
        self
    }

    #[must_use]
    pub fn with_dots_toggled(mut self) -> Self {
        self.show_dots = !self.show_dots;
        self
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Buttons,
            show_fingers: true,
            show_dots: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_buttons_with_both_aids() {
        let settings = GameSettings::default();
        assert_eq!(settings.input_mode(), InputMode::Buttons);
        assert!(settings.show_fingers());
        assert!(settings.show_dots());
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let settings = GameSettings::default().with_fingers_toggled();
        assert!(!settings.show_fingers());
        assert!(settings.with_fingers_toggled().show_fingers());

        let typed = settings.with_input_mode(InputMode::Typing);
        assert_eq!(typed.input_mode(), InputMode::Typing);
    }
}
