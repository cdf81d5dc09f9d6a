//! Resolution of a print-call argument into display text.

/// Contents of `s` when it is exactly one single- or double-quoted literal.
///
/// The opening quote must not reappear before the closing one, so
/// `'a' + 'b'` is not a literal. A lone quote is not a literal either.
fn unquote(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let inner = s.get(1..)?.strip_suffix(quote)?;
    (!inner.contains(quote)).then_some(inner)
}

fn variable(raw: &str) -> String {
    format!("[variable: {raw}]")
}

/// Turn the raw argument of a print-like call into the text it would show.
///
/// - A quoted literal yields its contents.
/// - An expression containing `+` is treated as string concatenation: quoted
///   parts are unquoted, anything else becomes a variable placeholder.
/// - Anything else is a variable placeholder.
pub fn extract_print_content(argument: &str) -> String {
    let argument = argument.trim();

    if let Some(literal) = unquote(argument) {
        return literal.to_string();
    }

    if argument.contains('+') {
        return argument
            .split('+')
            .map(str::trim)
            .map(|part| match unquote(part) {
                Some(literal) => literal.to_string(),
                None => variable(part),
            })
            .collect();
    }

    variable(argument)
}
