use mathpath_core::model::PathRange;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    En,
    /// Swedish is the launch default.
    #[default]
    Sv,
}

impl Language {
    /// The other language, for the menu toggle.
    #[must_use]
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Sv,
            Language::Sv => Language::En,
        }
    }

    /// Short uppercase code shown on the toggle button.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Sv => "SV",
        }
    }

    /// Parses a language code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "sv" => Some(Language::Sv),
            _ => None,
        }
    }
}

/// All user-facing text for one language.
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub choose_path: &'static str,
    pub numbers: &'static str,
    pub levels: &'static str,
    pub customization: &'static str,
    pub buttons: &'static str,
    pub write: &'static str,
    pub fingers_on: &'static str,
    pub fingers_off: &'static str,
    pub dots_on: &'static str,
    pub dots_off: &'static str,
    pub level: &'static str,
    pub correct: &'static str,
    pub try_again: &'static str,
    pub check: &'static str,
    pub path_complete: &'static str,
    pub mastered: &'static str,
    pub continue_to: &'static str,
    pub back_menu: &'static str,
    pub keep_going: &'static str,
    pub score: &'static str,
}

impl Strings {
    /// Fills the path range into the mastered line of the completion card.
    #[must_use]
    pub fn mastered_text(&self, range: PathRange) -> String {
        self.mastered.replace("{range}", &range.to_string())
    }
}

static EN: Strings = Strings {
    title: "Math Kids",
    subtitle: "Ready to climb the levels?",
    choose_path: "Choose your Path",
    numbers: "Numbers",
    levels: "Levels",
    customization: "Customization",
    buttons: "Buttons",
    write: "Write",
    fingers_on: "Fingers: ON",
    fingers_off: "Fingers: OFF",
    dots_on: "Dots: ON",
    dots_off: "Dots: OFF",
    level: "Level",
    correct: "Correct!",
    try_again: "Try Again",
    check: "Check",
    path_complete: "Path Complete!",
    mastered: "You mastered the 0-{range} levels!",
    continue_to: "Continue to 0 -",
    back_menu: "Back to Menu",
    keep_going: "Keep going!",
    score: "Score",
};

static SV: Strings = Strings {
    title: "Matte-Kul",
    subtitle: "Redo att klättra i nivåerna?",
    choose_path: "Välj din väg",
    numbers: "Tal",
    levels: "Nivåer",
    customization: "Anpassning",
    buttons: "Knappar",
    write: "Skriv",
    fingers_on: "Fingrar: PÅ",
    fingers_off: "Fingrar: AV",
    dots_on: "Prickar: PÅ",
    dots_off: "Prickar: AV",
    level: "Nivå",
    correct: "Rätt!",
    try_again: "Försök igen",
    check: "Rätta",
    path_complete: "Banan Avklarad!",
    mastered: "Du klarade 0-{range} nivåerna!",
    continue_to: "Fortsätt till 0 -",
    back_menu: "Tillbaks till menyn",
    keep_going: "Fortsätt så!",
    score: "Poäng",
};

/// Static lookup for the selected language.
#[must_use]
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Sv => &SV,
    }
}
