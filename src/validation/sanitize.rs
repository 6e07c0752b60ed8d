//! Free-text sanitization for form input
//!
//! Escapes HTML-significant characters, strips embedded URLs and rejects input
//! that still carries script-related tokens afterwards.

use regex::Regex;
use std::sync::LazyLock;

/// Entities produced by [`escape_html`]; an `&` already starting one is kept as is
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:lt|gt|amp|quot|apos|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("valid entity regex")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]")
        .expect("valid url regex")
});

static SUSPICIOUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)script|onerror|onload|javascript|eval|alert|prompt|confirm|document|window")
        .expect("valid denylist regex")
});

/// Escape `<`, `>`, `&`, `"` and `'` as HTML entities
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for (idx, ch) in input.char_indices() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '&' if ENTITY_RE.is_match(&input[idx..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Remove URL-like substrings (`http://`, `https://`, `ftp://`, `file://`)
pub fn strip_urls(input: &str) -> String {
    URL_RE.replace_all(input, "").into_owned()
}

/// Whether the text contains a denylisted script-related substring
pub fn is_suspicious(input: &str) -> bool {
    SUSPICIOUS_RE.is_match(input)
}

/// Sanitize user input for display and submission.
///
/// Returns an empty string when the escaped, URL-stripped text still contains a
/// denylisted token. Only the input length is logged on rejection.
pub fn sanitize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let sanitized = strip_urls(&escape_html(input));
    if is_suspicious(&sanitized) {
        tracing::warn!(
            input_length = input.chars().count(),
            "Suspicious input detected and blocked"
        );
        return String::new();
    }

    sanitized.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod escaping {
        use super::*;

        #[test]
        fn test_escapes_markup_characters() {
            assert_eq!(
                escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
                "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
            );
        }

        #[test]
        fn test_existing_entities_are_kept() {
            assert_eq!(escape_html("Fish &amp; Chips"), "Fish &amp; Chips");
            assert_eq!(escape_html("&#39;quoted&#x27;"), "&#39;quoted&#x27;");
        }

        #[test]
        fn test_bare_ampersand_before_word_is_escaped() {
            assert_eq!(escape_html("&ltd"), "&amp;ltd");
        }

        #[test]
        fn test_plain_text_is_unchanged() {
            assert_eq!(escape_html("Jane Doe"), "Jane Doe");
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn test_strips_http_and_https() {
            assert_eq!(
                strip_urls("see http://example.com and https://x.org/a?b=c"),
                "see  and "
            );
        }

        #[test]
        fn test_strips_ftp_and_file_case_insensitive() {
            assert_eq!(strip_urls("FTP://host/file.txt ok"), " ok");
            assert_eq!(strip_urls("file:///etc/hosts"), "");
        }

        #[test]
        fn test_bare_scheme_is_kept() {
            assert_eq!(strip_urls("http://"), "http://");
        }
    }

    mod sanitize {
        use super::*;

        #[test]
        fn test_empty_input() {
            assert_eq!(sanitize_input(""), "");
        }

        #[test]
        fn test_trims_result() {
            assert_eq!(sanitize_input("  Jane Doe  "), "Jane Doe");
        }

        #[test]
        fn test_script_tag_is_rejected() {
            assert_eq!(sanitize_input("<script>steal()</script>"), "");
        }

        #[test]
        fn test_event_handler_is_rejected() {
            assert_eq!(sanitize_input("<img src=x onerror=x>"), "");
        }

        #[test]
        fn test_tokens_inside_words_are_rejected() {
            assert_eq!(sanitize_input("<video onloadstart=fetch(1)>"), "");
            assert_eq!(sanitize_input("<a href=javascripts>"), "");
            assert_eq!(sanitize_input("documentElement"), "");
            assert_eq!(sanitize_input("Evaline"), "");
        }

        #[test]
        fn test_url_is_removed_from_text() {
            assert_eq!(
                sanitize_input("Portfolio at https://jane.dev today"),
                "Portfolio at  today"
            );
        }

        #[test]
        fn test_idempotent_on_escaped_input() {
            let inputs = [
                "Jane Doe",
                "Fish & Chips",
                "Don't <stop> \"now\"",
                "  padded & spaced  ",
                "visit https://example.com?a=1&b=2 now",
                "&lt;already&gt; escaped",
                "",
            ];
            for input in inputs {
                let once = sanitize_input(input);
                assert_eq!(sanitize_input(&once), once, "input: {input:?}");
            }
        }
    }
}
