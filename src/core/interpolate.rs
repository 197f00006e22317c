// src/core/interpolate.rs

/// Substitute `${name}` fragments in `text` by their binding.
/// `name` is made of word characters; unknown names are left as-is.
pub fn interpolate(text: &str, bindings: &[(&str, &str)]) -> String {
    if bindings.is_empty() {
        return s!(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let name_len = after
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map(|(i, _)| i)
            .unwrap_or(after.len());

        if after[name_len..].starts_with('}') {
            let name = &after[..name_len];
            match bindings.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + name_len + 1]),
            }
            rest = &after[name_len + 1..];
        } else {
            // not a placeholder; keep "${" and rescan after it
            out.push_str("${");
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::interpolate;

    #[test]
    fn basics() {
        assert_eq!(interpolate("foo", &[]), "foo");
        assert_eq!(interpolate("foo", &[("foo", "1")]), "foo");
        assert_eq!(interpolate("${foo}", &[]), "${foo}");
        assert_eq!(interpolate("${foo}", &[("bar", "1")]), "${foo}");
        assert_eq!(interpolate("Value is: ${foo}", &[("foo", "1")]), "Value is: 1");
    }

    #[test]
    fn unterminated_and_nested() {
        assert_eq!(interpolate("${foo", &[("foo", "1")]), "${foo");
        assert_eq!(interpolate("${${foo}}", &[("foo", "1")]), "${1}");
        assert_eq!(interpolate("$foo ${foo}", &[("foo", "x")]), "$foo x");
    }
}
