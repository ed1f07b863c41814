use crate::models::{Language, UnknownLanguage};
use tracing::debug;

/// Resolves a language label, falling back to the default language for anything unrecognized.
pub fn get_language(label: &str) -> Language {
	label.parse().unwrap_or_else(|err: UnknownLanguage| {
		// an empty label just means no language was asked for
		if !label.is_empty() {
			debug!(%err, fallback = %Language::default(), "falling back to default language");
		}
		Language::default()
	})
}
