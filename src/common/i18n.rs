// src/common/i18n.rs

use std::{collections::HashMap, sync::Arc};

pub const DEFAULT_LANG: &str = "pt";

// Catálogo de mensagens: (chave, português, inglês)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("validation_failed", "Um ou mais campos são inválidos.", "One or more fields are invalid."),
    ("invalid_body", "Corpo da requisição inválido.", "Invalid request body."),
    ("invalid_query", "Parâmetros da consulta inválidos.", "Invalid query parameters."),
    ("email_already_exists", "Já existe um usuário com esse e-mail.", "A user with this e-mail already exists."),
    ("invalid_credentials", "E-mail ou senha inválidos.", "Invalid e-mail or password."),
    ("unauthenticated", "Não autenticado.", "Not authenticated."),
    ("user_not_found", "Usuário não encontrado.", "User not found."),
    ("internal_error", "Ocorreu um erro inesperado.", "An unexpected error occurred."),
    ("not_found.cliente", "Cliente não encontrado.", "Client not found."),
    ("not_found.servico", "Serviço não encontrado.", "Service not found."),
    ("not_found.colaborador", "Colaborador não encontrado.", "Staff member not found."),
    ("not_found.agendamento", "Agendamento não encontrado.", "Appointment not found."),
    ("not_found.meta", "Meta não encontrada.", "Goal not found."),
];

/// Mensagens traduzidas por idioma. Idiomas desconhecidos caem no português.
#[derive(Clone)]
pub struct I18nStore {
    catalogs: Arc<HashMap<&'static str, HashMap<&'static str, &'static str>>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut pt = HashMap::new();
        let mut en = HashMap::new();
        for (key, pt_msg, en_msg) in MESSAGES {
            pt.insert(*key, *pt_msg);
            en.insert(*key, *en_msg);
        }

        let mut catalogs = HashMap::new();
        catalogs.insert("pt", pt);
        catalogs.insert("en", en);

        Self { catalogs: Arc::new(catalogs) }
    }

    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.catalogs
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| self.catalogs.get(DEFAULT_LANG).and_then(|c| c.get(key)))
            .map(|msg| msg.to_string())
            // Chave sem tradução: devolve a própria chave
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_languages() {
        let store = I18nStore::new();
        assert_eq!(store.translate("pt", "unauthenticated"), "Não autenticado.");
        assert_eq!(store.translate("en", "unauthenticated"), "Not authenticated.");
    }

    #[test]
    fn unknown_language_falls_back_to_portuguese() {
        let store = I18nStore::new();
        assert_eq!(store.translate("de", "not_found.meta"), "Meta não encontrada.");
    }

    #[test]
    fn unknown_key_is_returned_as_is() {
        let store = I18nStore::new();
        assert_eq!(store.translate("en", "no.such.key"), "no.such.key");
    }
}
