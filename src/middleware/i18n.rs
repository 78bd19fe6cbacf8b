// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LANG;

/// Idioma principal pedido no `Accept-Language` ("pt-BR" vira "pt").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl Locale {
    pub fn from_header(value: &str) -> Self {
        accept_language::parse(value)
            .first()
            .and_then(|tag| tag.split('-').next())
            .filter(|lang| !lang.is_empty())
            .map(|lang| Locale(lang.to_ascii_lowercase()))
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn picks_the_primary_subtag_of_the_preferred_language() {
        assert_eq!(Locale::from_header("en-US,en;q=0.9,pt;q=0.5").0, "en");
        assert_eq!(Locale::from_header("pt-BR").0, "pt");
        assert_eq!(Locale::from_header("fr;q=0.2, EN;q=0.8").0, "en");
    }

    #[test]
    fn falls_back_to_portuguese() {
        assert_eq!(Locale::from_header("").0, "pt");
        assert_eq!(Locale::default().0, "pt");
    }
}
