use std::{fmt, str::FromStr};
use thiserror::Error;

pub const ENGLISH: &str = "English";
pub const SPANISH: &str = "Spanish";
pub const PORTUGUESE: &str = "Portuguese";

pub const ENGLISH_HELLO_PREFIX: &str = "Hello, ";
pub const SPANISH_HELLO_PREFIX: &str = "Hola, ";
pub const PORTUGUESE_HELLO_PREFIX: &str = "Olá, ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
	#[default]
	English,
	Spanish,
	Portuguese,
}

impl Language {
	pub fn label(self) -> &'static str {
		match self {
			Language::English => ENGLISH,
			Language::Spanish => SPANISH,
			Language::Portuguese => PORTUGUESE,
		}
	}

	pub fn prefix(self) -> &'static str {
		match self {
			Language::English => ENGLISH_HELLO_PREFIX,
			Language::Spanish => SPANISH_HELLO_PREFIX,
			Language::Portuguese => PORTUGUESE_HELLO_PREFIX,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language label {0:?}")]
pub struct UnknownLanguage(pub String);

/// Exact, case-sensitive match against the known labels.
impl FromStr for Language {
	type Err = UnknownLanguage;

	fn from_str(label: &str) -> Result<Self, Self::Err> {
		match label {
			ENGLISH => Ok(Language::English),
			SPANISH => Ok(Language::Spanish),
			PORTUGUESE => Ok(Language::Portuguese),
			other => Err(UnknownLanguage(other.to_string())),
		}
	}
}
