//! Localized response messages.
//!
//! Every endpoint resolves its human-readable message through the
//! [`MessageCatalog`], keyed by the language tag taken from the request's
//! `Accept-Language` header. Unknown languages fall back to English.

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use std::collections::HashMap;
use std::convert::Infallible;

pub const DEFAULT_LANG: &str = "en";

/// Language tag resolved from the `Accept-Language` request header.
///
/// Only the primary subtag of the first language range is kept, so
/// `fr-CA,fr;q=0.9` resolves to `fr`. An absent or unparsable header
/// resolves to `en`.
#[derive(Debug, Clone)]
pub struct Lang(String);

impl Lang {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang(DEFAULT_LANG.to_string())
    }
}

impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(primary_subtag)
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Ok(Lang(lang))
    }
}

fn primary_subtag(header: &str) -> Option<String> {
    let range = header.split(',').next()?.trim();
    let tag = range.split(';').next()?.trim();
    let primary = tag.split('-').next()?.trim().to_ascii_lowercase();

    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(primary)
}

/// Immutable key-to-string catalogs per language, built once at startup and
/// shared through the application state.
pub struct MessageCatalog {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        let en = HashMap::from([
            ("student.created", "Student created successfully"),
            ("students.retrieved", "Students retrieved successfully"),
            ("student.retrieved", "Student retrieved successfully"),
            ("student.updated", "Student updated successfully"),
            ("student.deleted", "Student deleted successfully"),
            ("student.not.found", "Student not found"),
        ]);

        let fr = HashMap::from([
            ("student.created", "Étudiant créé avec succès"),
            ("students.retrieved", "Étudiants récupérés avec succès"),
            ("student.retrieved", "Étudiant récupéré avec succès"),
            ("student.updated", "Étudiant mis à jour avec succès"),
            ("student.deleted", "Étudiant supprimé avec succès"),
            ("student.not.found", "Étudiant introuvable"),
        ]);

        let es = HashMap::from([
            ("student.created", "Estudiante creado con éxito"),
            ("students.retrieved", "Estudiantes recuperados con éxito"),
            ("student.retrieved", "Estudiante recuperado con éxito"),
            ("student.updated", "Estudiante actualizado con éxito"),
            ("student.deleted", "Estudiante eliminado con éxito"),
            ("student.not.found", "Estudiante no encontrado"),
        ]);

        Self {
            catalogs: HashMap::from([("en", en), ("fr", fr), ("es", es)]),
        }
    }

    /// Resolve `key` for `lang`, falling back to the English catalog for
    /// unknown languages. A key missing from every catalog echoes the key
    /// itself so a missing translation never fails the request.
    pub fn get(&self, key: &str, lang: &Lang) -> String {
        self.catalogs
            .get(lang.as_str())
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.catalogs
                    .get(DEFAULT_LANG)
                    .and_then(|catalog| catalog.get(key))
            })
            .map(|message| (*message).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(tag: &str) -> Lang {
        Lang(tag.to_string())
    }

    #[test]
    fn test_lookup_known_language() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.get("student.created", &lang("fr")),
            "Étudiant créé avec succès"
        );
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.get("student.not.found", &lang("de")),
            "Student not found"
        );
    }

    #[test]
    fn test_missing_key_echoes_key() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.get("student.enrolled", &lang("en")), "student.enrolled");
    }

    #[test]
    fn test_primary_subtag_parsing() {
        assert_eq!(primary_subtag("fr-CA,fr;q=0.9"), Some("fr".to_string()));
        assert_eq!(primary_subtag("ES"), Some("es".to_string()));
        assert_eq!(primary_subtag("en-US"), Some("en".to_string()));
        assert_eq!(primary_subtag("*"), None);
        assert_eq!(primary_subtag(""), None);
    }

    #[test]
    fn test_default_lang_is_english() {
        assert_eq!(Lang::default().as_str(), "en");
    }
}
