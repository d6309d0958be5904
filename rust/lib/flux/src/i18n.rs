//! I18nStore — path-routed user-facing text.
//!
//! Sits next to the state store. Handlers never hard-code the text of a
//! notice or a button; they ask the I18nStore for `notice/lookup/not_found`
//! or `button/submit/add_inventory` and the current locale decides the
//! wording.
//!
//! Translators are registered per pattern (`+` / `#` wildcards):
//!
//! ```ignore
//! let i18n = I18nStore::new("es");
//! i18n.handle("notice/#", Arc::new(NoticeStrings));
//! i18n.get("notice/lookup/not_found");
//! i18n.format("notice/transfer/rejected", &[("errors", "Cantidad inválida")]);
//! ```

use std::sync::{Arc, RwLock};

use crate::topic::TopicTable;

// ── Params ──

/// Named arguments substituted into a message.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Parse `key=value&key2=value2` (no leading `?`).
    pub fn parse(query: &str) -> Self {
        Self(
            query
                .split('&')
                .filter(|s| !s.is_empty())
                .filter_map(|pair| {
                    let (k, v) = pair.split_once('=')?;
                    Some((k.to_string(), v.to_string()))
                })
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Translator ──

/// Produces the text for a message path in a locale.
pub trait Translator: Send + Sync + 'static {
    fn translate(&self, path: &str, params: &Params, locale: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &Params, &str) -> String + Send + Sync + 'static,
{
    fn translate(&self, path: &str, params: &Params, locale: &str) -> String {
        (self)(path, params, locale)
    }
}

// ── I18nStore ──

pub struct I18nStore {
    table: TopicTable<Arc<dyn Translator>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(locale: &str) -> Self {
        Self {
            table: TopicTable::new(),
            locale: RwLock::new(locale.to_string()),
        }
    }

    pub fn handle(&self, pattern: &str, translator: Arc<dyn Translator>) {
        self.table.insert(pattern, translator);
    }

    /// Text for `url`, which is a message path optionally followed by
    /// `?key=value` params. Unknown paths come back unchanged.
    pub fn get(&self, url: &str) -> String {
        let (path, query) = split_url(url);
        let params = if query.is_empty() {
            Params::empty()
        } else {
            Params::parse(query)
        };
        self.format(path, &params)
    }

    /// Text for `path` with explicit params. Use this when a param value
    /// may itself contain `&` or `=`.
    pub fn format(&self, path: &str, params: &Params) -> String {
        let locale = self.locale.read().unwrap().clone();
        match self.table.match_topic(path).first() {
            Some(translator) => translator.translate(path, params, &locale),
            None => path.to_string(),
        }
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write().unwrap() = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }
}

fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_params() {
        let p = Params::parse("producto=7&ubicacion=2");
        assert_eq!(p.get("producto"), Some("7"));
        assert_eq!(p.get("ubicacion"), Some("2"));
        assert_eq!(p.get("missing"), None);
        assert!(Params::parse("").is_empty());
    }

    #[test]
    fn split_url_with_and_without_query() {
        assert_eq!(split_url("label/download?p=1"), ("label/download", "p=1"));
        assert_eq!(split_url("button/submit"), ("button/submit", ""));
    }

    #[test]
    fn locale_switches_text() {
        let i18n = I18nStore::new("es");
        i18n.handle(
            "button/submit/add_inventory",
            Arc::new(|_: &str, _: &Params, locale: &str| match locale {
                "en" => "Add inventory".into(),
                _ => "Agregar inventario".into(),
            }),
        );

        assert_eq!(i18n.get("button/submit/add_inventory"), "Agregar inventario");
        i18n.set_locale("en");
        assert_eq!(i18n.get("button/submit/add_inventory"), "Add inventory");
        assert_eq!(i18n.locale(), "en");
    }

    #[test]
    fn unknown_path_is_returned_as_is() {
        let i18n = I18nStore::new("es");
        assert_eq!(i18n.get("notice/unknown"), "notice/unknown");
    }

    #[test]
    fn format_keeps_separators_in_values() {
        let i18n = I18nStore::new("es");
        i18n.handle(
            "notice/#",
            Arc::new(|_: &str, p: &Params, _: &str| {
                format!("Error: {}", p.get("errors").unwrap_or(""))
            }),
        );

        let text = i18n.format("notice/transfer/rejected", &Params::new(&[("errors", "a=b & c")]));
        assert_eq!(text, "Error: a=b & c");
    }

    #[test]
    fn first_registered_translator_wins() {
        let i18n = I18nStore::new("es");
        i18n.handle("notice/#", Arc::new(|_: &str, _: &Params, _: &str| "general".into()));
        i18n.handle("notice/x", Arc::new(|_: &str, _: &Params, _: &str| "specific".into()));
        assert_eq!(i18n.get("notice/x"), "general");
    }

    #[test]
    fn concurrent_reads() {
        let i18n = Arc::new(I18nStore::new("es"));
        i18n.handle("ok", Arc::new(|_: &str, _: &Params, _: &str| "listo".into()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let i18n = Arc::clone(&i18n);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        assert_eq!(i18n.get("ok"), "listo");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
