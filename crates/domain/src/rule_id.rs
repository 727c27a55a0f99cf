use crate::whitelist::{tokenize, unquote};

const ID_PREFIX: &str = "id:";

/// Collect the rule ids declared in naxsi rule text.
///
/// Looks at every `id:NNN` fragment, quoted or not, one rule per line.
/// Blank lines and `#` comments are skipped. A line with broken quoting is
/// still scanned word by word.
pub fn extract_rule_ids(text: &str) -> Vec<String> {
    let mut ids = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens = tokenize(line)
            .unwrap_or_else(|_| line.split_whitespace().map(String::from).collect());

        for token in &tokens {
            let token = unquote(token.strip_suffix(';').unwrap_or(token));
            if let Some(id) = token.strip_prefix(ID_PREFIX) {
                if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                    ids.push(id.to_string());
                }
            }
        }
    }

    ids
}
