use crate::errors::TokenizeError;

const QUOTES: [char; 2] = ['"', '\''];

fn is_quote(ch: char) -> bool {
    QUOTES.contains(&ch)
}

/// Split a raw whitelist into tokens separated by ASCII whitespace.
///
/// Quoting rules:
/// - a token that *starts* with `"` or `'` runs until the matching quote,
///   whitespace included, and ends right after it (`"mz:a b";` gives
///   `mz:a b` and `;`)
/// - a quote in the middle of a bare word is an ordinary character
/// - the surrounding quotes of a token are stripped once, never recursively
///
/// `;` gets no special treatment here; deciding what a terminator means is
/// left to the fragment classifier.
pub fn tokenize(raw: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut chars = raw.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_ascii_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();

        if is_quote(ch) {
            token.push(ch);
            chars.next();
            loop {
                match chars.next() {
                    Some((_, c)) => {
                        token.push(c);
                        if c == ch {
                            break;
                        }
                    }
                    None => {
                        return Err(TokenizeError::UnterminatedQuote {
                            quote: ch,
                            position: start,
                        })
                    }
                }
            }
        } else {
            while let Some(&(_, c)) = chars.peek() {
                if c.is_ascii_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }

        tokens.push(unquote(&token).to_string());
    }

    Ok(tokens)
}

/// Remove one pair of matching surrounding quotes, if present.
pub fn unquote(token: &str) -> &str {
    let mut chars = token.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && is_quote(first) => {
            &token[1..token.len() - 1]
        }
        _ => token,
    }
}
