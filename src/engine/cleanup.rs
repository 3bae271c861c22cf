//! Ingredient text cleanup.
//!
//! Trim, drop the first char outside `[\w\s%/-]`, trim again. Only the first
//! offending char goes: this targets a single stray artifact such as the `*`
//! in `"cooked lobster meat*"` or the period closing `"for garnish."`.

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '%' | '/' | '-')
}

pub(crate) fn clean_ingredient(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().find(|&(_, c)| !is_kept(c)) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(trimmed.len());
            out.push_str(&trimmed[..idx]);
            out.push_str(&trimmed[idx + c.len_utf8()..]);
            out.trim().to_string()
        }
        None => trimmed.to_string(),
    }
}
