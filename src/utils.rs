pub(crate) const QUOTE: char = '"';

pub(crate) fn double_quotes(s: &str) -> String {
    s.replace(QUOTE, "\"\"")
}

pub(crate) fn wrap_with_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(QUOTE);
    out.push_str(s);
    out.push(QUOTE);
    out
}
