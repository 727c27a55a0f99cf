use super::entry::WhitelistEntry;
use super::fragment::ID_PREFIX;

const ALL_RULES: &str = "wl:0";

/// Render a whitelist as a sentence, e.g.
/// `Whitelist the rule 1, except the rule 3 if matching in $URL:/login.`
///
/// `rule_exists` decides whether an id gets a reference; `link` produces the
/// reference target for it. Neither is consulted for `wl:0`.
pub fn explain<E, L>(entry: &WhitelistEntry, rule_exists: E, link: L) -> String
where
    E: Fn(&str) -> bool,
    L: Fn(&str) -> String,
{
    let linkify = |sid: &str| -> String {
        if rule_exists(sid) {
            format!("<a href=\"{}\">{}</a>", link(sid), sid)
        } else {
            sid.to_string()
        }
    };

    let id_spec = entry.id_spec();
    let ids = id_spec.strip_prefix(ID_PREFIX).unwrap_or(id_spec);

    let mut sentence = if ids.is_empty() {
        "Whitelist no rule".to_string()
    } else if id_spec == ALL_RULES {
        "Whitelist all rules".to_string()
    } else if ids.bytes().all(|b| b.is_ascii_digit()) {
        format!("Whitelist the rule {}", linkify(ids))
    } else {
        let rules: Vec<String> = ids
            .split(',')
            .map(|rid| match rid.strip_prefix('-') {
                Some(excluded) => format!("except the rule {}", linkify(excluded)),
                None => format!("the rule {}", linkify(rid)),
            })
            .collect();
        format!("Whitelist {}", rules.join(", "))
    };

    if entry.match_zone().is_empty() {
        sentence.push('.');
    } else {
        sentence.push_str(&format!(" if matching in {}.", entry.match_zone()));
    }

    sentence
}
