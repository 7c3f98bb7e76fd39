use actix_session::Session;

/// Session key holding the visitor's language code.
pub const SESSION_KEY: &str = "preferred_language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Read the stored preference; English when absent or unreadable.
pub fn load(session: &Session) -> Language {
    session
        .get::<String>(SESSION_KEY)
        .unwrap_or(None)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist a new preference.
pub fn store(session: &Session, language: Language) -> Result<(), String> {
    session
        .insert(SESSION_KEY, language.code())
        .map_err(|e| format!("Failed to store language: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::En.other(), Language::Ar);
    }
}
