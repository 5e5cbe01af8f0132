/// Splits a raw query into search terms.
///
/// The query is lower-cased, every character other than an ASCII letter, ASCII digit,
/// underscore or whitespace is removed, and the remainder is split on whitespace. Terms shorter
/// than `min_term_chars` are dropped. Order and duplicates are kept.
///
/// Whitespace is the ECMAScript `\s` set: Unicode `White_Space` plus U+FEFF, without U+0085.
pub fn tokenize_query(query: &str, min_term_chars: usize) -> Vec<String> {
	let lowered = query.to_lowercase();
	let mut normalized = String::with_capacity(lowered.len());

	for ch in lowered.chars() {
		if ch.is_ascii_alphanumeric() || ch == '_' || is_query_whitespace(ch) {
			normalized.push(ch);
		}
	}

	// Whitespace is split away, so terms are ASCII and byte length is character length.
	normalized
		.split(is_query_whitespace)
		.filter(|term| !term.is_empty() && term.len() >= min_term_chars)
		.map(str::to_string)
		.collect()
}

fn is_query_whitespace(ch: char) -> bool {
	match ch {
		'\u{feff}' => true,
		'\u{85}' => false,
		_ => ch.is_whitespace(),
	}
}
