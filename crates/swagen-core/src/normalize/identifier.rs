/// Derive a unique, readable operation identifier from an HTTP method and a
/// URL path template.
///
/// `{param}` segments become `byParam`, segments are camel-cased together
/// (hyphens, case changes and digit-to-letter transitions are word
/// boundaries), and the lower-cased method is prepended.
///
/// Examples:
/// - `GET /users/{id}` → `getUsersById`
/// - `DELETE /orders/{orderId}/items` → `deleteOrdersByOrderIdItems`
/// - `get /` → `get`
pub fn method_name(method: &str, path: &str) -> String {
    if path.is_empty() || path == "/" {
        return method.to_string();
    }

    let clean = path.strip_suffix('/').unwrap_or(path);

    let rewritten: Vec<String> = clean
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(rewrite_segment)
        .collect();

    let camel = camelize(&rewritten.join("-"));

    format!("{}{}", method.to_lowercase(), capitalize_first(&camel))
}

/// Rewrite a `{paramName}` template segment to `byParamName`; other
/// segments pass through unchanged.
fn rewrite_segment(segment: &str) -> String {
    if segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}') {
        format!("by{}", capitalize_first(&segment[1..segment.len() - 1]))
    } else {
        segment.to_string()
    }
}

/// Upper-case the first character, leaving the remainder untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Camel-case a joined segment string. Word boundaries are non-alphanumeric
/// characters, lower-to-upper case changes, and digit-to-letter transitions;
/// the first word is fully lower-cased, subsequent words get an upper-cased
/// first letter with the remainder lower-cased.
fn camelize(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

fn split_words(input: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    let chars: Vec<char> = input.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = match prev {
            Some(p) => {
                (p.is_lowercase() && ch.is_uppercase())
                    || (p.is_ascii_digit() && ch.is_alphabetic())
                    // Acronym run ends where the next letter is lowercase.
                    || (p.is_uppercase()
                        && ch.is_uppercase()
                        && chars.get(i + 1).is_some_and(|n| n.is_lowercase()))
            }
            None => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_returns_method() {
        assert_eq!(method_name("get", "/"), "get");
        assert_eq!(method_name("get", ""), "get");
    }

    #[test]
    fn path_parameter_becomes_by_prefix() {
        assert_eq!(method_name("GET", "/users/{id}"), "getUsersById");
    }

    #[test]
    fn nested_path_with_parameter() {
        assert_eq!(
            method_name("DELETE", "/orders/{orderId}/items"),
            "deleteOrdersByOrderIdItems"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(method_name("GET", "/users/"), "getUsers");
    }

    #[test]
    fn hyphenated_segments_are_camel_cased() {
        assert_eq!(method_name("POST", "/user-roles/assign"), "postUserRolesAssign");
    }

    #[test]
    fn digits_end_a_word() {
        assert_eq!(method_name("GET", "/v1/users"), "getV1Users");
    }

    #[test]
    fn acronym_runs_split_before_trailing_lowercase() {
        assert_eq!(method_name("GET", "/APIKeys"), "getApiKeys");
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = method_name("PUT", "/orders/{orderId}");
        let b = method_name("PUT", "/orders/{orderId}");
        assert_eq!(a, b);
        assert_eq!(a, "putOrdersByOrderId");
    }
}
