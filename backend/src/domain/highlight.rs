//! HTML rendering of a snippet's code body.
//!
//! Produces a small self-contained page: the code is HTML-escaped and
//! wrapped in `<pre><code>` with the language and style names exposed as CSS
//! classes, optionally as an ordered list when line numbers are requested.
//! Rendering is pure and read-only; no policy gate applies beyond the general
//! read permission.

use std::fmt::Write as _;

use crate::domain::Snippet;

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn render_code(snippet: &Snippet) -> String {
    let language = snippet.language().as_str();
    if snippet.linenos() {
        let mut body = String::new();
        for line in snippet.code().lines() {
            let _ = writeln!(
                body,
                "<li><code class=\"language-{language}\">{}</code></li>",
                escape_html(line)
            );
        }
        format!("<ol class=\"linenos\">\n{body}</ol>")
    } else {
        format!(
            "<pre><code class=\"language-{language}\">{}</code></pre>",
            escape_html(snippet.code())
        )
    }
}

/// Render the snippet as a standalone HTML document.
#[must_use]
pub fn render(snippet: &Snippet) -> String {
    let title = escape_html(snippet.title());
    let style = snippet.style().as_str();
    let code = render_code(snippet);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n\
         <div class=\"highlight {style}\">\n{code}\n</div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the highlight renderer.
    use chrono::Utc;

    use super::*;
    use crate::domain::{Language, SnippetDraft, SnippetId, Style, UserId};

    fn snippet(code: &str, linenos: bool, style: Style) -> Snippet {
        let draft = match SnippetDraft::new("demo", code, linenos, Language::Python, style) {
            Ok(draft) => draft,
            Err(err) => panic!("fixture draft must validate: {err}"),
        };
        Snippet::create(SnippetId::random(), draft, UserId::random(), Utc::now())
    }

    #[test]
    fn escapes_markup_in_the_code_body() {
        let html = render(&snippet("<script>alert('x')</script>", false, Style::Friendly));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn exposes_style_and_language_as_css_classes() {
        let html = render(&snippet("print(1)", false, Style::Monokai));
        assert!(html.contains("class=\"highlight monokai\""));
        assert!(html.contains("class=\"language-python\""));
    }

    #[test]
    fn renders_line_numbers_as_an_ordered_list() {
        let html = render(&snippet("a = 1\nb = 2", true, Style::Friendly));
        assert!(html.contains("<ol class=\"linenos\">"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn renders_plain_pre_without_line_numbers() {
        let html = render(&snippet("a = 1\nb = 2", false, Style::Friendly));
        assert!(html.contains("<pre><code"));
        assert!(!html.contains("<ol"));
    }
}
