use crate::utils::get_language;
use tracing::trace;

pub const DEFAULT_NAME: &str = "World";

pub fn greeting_prefix(language: &str) -> &'static str {
	let language = get_language(language);
	trace!(%language, "resolved greeting language");
	language.prefix()
}

/// Greets `name` in `language`, using "World" when no name is given.
///
/// Labels are matched exactly; anything other than "Spanish" or "Portuguese" greets in English.
pub fn hello(name: &str, language: &str) -> String {
	let name = if name.is_empty() { DEFAULT_NAME } else { name };
	format!("{}{}", greeting_prefix(language), name)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_correct_message(got: String, want: &str) {
		assert_eq!(got, want, "got {got:?} want {want:?}");
	}

	#[test]
	fn saying_hello_to_people() {
		assert_correct_message(hello("João", ""), "Hello, João");
	}

	#[test]
	fn says_hello_world_when_name_is_empty() {
		assert_correct_message(hello("", ""), "Hello, World");
	}

	#[test]
	fn in_spanish() {
		assert_correct_message(hello("João", "Spanish"), "Hola, João");
		assert_correct_message(hello("", "Spanish"), "Hola, World");
	}

	#[test]
	fn in_portuguese() {
		assert_correct_message(hello("João", "Portuguese"), "Olá, João");
		assert_correct_message(hello("", "Portuguese"), "Olá, World");
	}

	#[test]
	fn unrecognized_languages_greet_in_english() {
		for language in ["", "English", "French", "spanish", "Portuguese "] {
			assert_correct_message(hello("Ana", language), "Hello, Ana");
		}
	}

	#[test]
	fn name_is_not_trimmed() {
		assert_correct_message(hello("  ", ""), "Hello,   ");
		assert_correct_message(hello(" Ana ", "Spanish"), "Hola,  Ana ");
	}

	#[test]
	fn same_inputs_give_same_greeting() {
		assert_eq!(hello("Ana", "Portuguese"), hello("Ana", "Portuguese"));
	}

	#[test]
	fn prefix_lookup() {
		assert_eq!(greeting_prefix("Spanish"), "Hola, ");
		assert_eq!(greeting_prefix("Portuguese"), "Olá, ");
		assert_eq!(greeting_prefix(""), "Hello, ");
		assert_eq!(greeting_prefix("Esperanto"), "Hello, ");
	}
}
