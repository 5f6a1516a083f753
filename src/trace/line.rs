/// Parse one lane declaration such as `Core 0: [T1, T1, T2]`.
///
/// Returns `None` when the line has no `:` or no `[...]` region after it.
/// The bracket region runs from the first `[` to the last `]` after the colon.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let (label, rest) = line.split_once(':')?;
    let open = rest.find('[')?;
    let close = rest.rfind(']')?;
    if close < open {
        return None;
    }

    let label = label.trim().to_string();
    let inside = rest[open + 1..close].trim();
    if inside.is_empty() {
        return Some((label, Vec::new()));
    }

    let tokens = inside
        .split(',')
        .map(|tok| unquote(tok.trim()).to_string())
        .collect();
    Some((label, tokens))
}

/// Strip exactly one outer pair of matching `'` or `"`.
fn unquote(tok: &str) -> &str {
    for quote in ['\'', '"'] {
        if tok.len() >= 2 && tok.starts_with(quote) && tok.ends_with(quote) {
            return &tok[1..tok.len() - 1];
        }
    }
    tok
}
