use unicode_normalization::UnicodeNormalization;

/// Normalized slug identifying a dish concept independent of its display
/// formatting: lowercase, diacritics stripped, separator runs collapsed
/// to single hyphens, everything else dropped.
///
/// Total and idempotent: every string maps to exactly one key, and a key
/// maps to itself. "Ají de Fideos" and "aji de fideos" share a key.
pub fn dish_key_from_name(name: &str) -> String {
	let mut normalized = String::with_capacity(name.len());

	for ch in name.nfd() {
		if is_combining_mark(ch) {
			continue;
		}

		for lower in ch.to_lowercase() {
			if lower.is_ascii_alphanumeric() {
				normalized.push(lower);
			} else if lower.is_whitespace() || lower == '-' {
				normalized.push(' ');
			}
		}
	}

	let mut key = String::with_capacity(normalized.len());

	for word in normalized.split_whitespace() {
		if !key.is_empty() {
			key.push('-');
		}

		key.push_str(word);
	}

	key
}

fn is_combining_mark(ch: char) -> bool {
	('\u{0300}'..='\u{036f}').contains(&ch)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_diacritics_and_hyphenates() {
		assert_eq!(dish_key_from_name("Ají de Fideos"), "aji-de-fideos");
		assert_eq!(dish_key_from_name("Salteñas"), "saltenas");
		assert_eq!(dish_key_from_name("Chairo Paceño"), "chairo-paceno");
	}

	#[test]
	fn cosmetic_variants_share_a_key() {
		assert_eq!(dish_key_from_name("FRICASE"), dish_key_from_name("fricase"));
		assert_eq!(dish_key_from_name("  Sopa   de Maní "), dish_key_from_name("Sopa de Mani"));
	}

	#[test]
	fn drops_punctuation() {
		assert_eq!(dish_key_from_name("Pique (Macho)!"), "pique-macho");
	}

	#[test]
	fn idempotent() {
		for name in ["Ají de Fideos", "Thimpu de Cordero", "fricase", "sopa-de-mani"] {
			let key = dish_key_from_name(name);

			assert_eq!(dish_key_from_name(&key), key, "for {name}");
		}
	}

	#[test]
	fn total_on_degenerate_input() {
		assert_eq!(dish_key_from_name(""), "");
		assert_eq!(dish_key_from_name("!!!"), "");
		assert_eq!(dish_key_from_name("   "), "");
	}
}
