//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag to an external resource
///
/// # Examples
/// ```ignore
/// anchor("https://e.com", "查看原文", "source-link")
/// // -> <a class="source-link" href="https://e.com" target="_blank" rel="noopener">查看原文</a>
/// ```
pub fn anchor(href: &str, text: &str, class: &str) -> String {
    format!(
        r#"<a class="{}" href="{}" target="_blank" rel="noopener">{}</a>"#,
        class,
        html_escape(href),
        html_escape(text)
    )
}

/// Generate an image tag
pub fn image(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img class="{}" src="{}" alt="{}">"#,
        class,
        html_escape(src),
        html_escape(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"AI" & 'ML'</b>"#),
            "&lt;b&gt;&quot;AI&quot; &amp; &#39;ML&#39;&lt;/b&gt;"
        );
        assert_eq!(html_escape("纯文本"), "纯文本");
    }

    #[test]
    fn test_anchor() {
        let a = anchor("https://e.com", "查看原文", "source-link");
        assert!(a.contains(r#"href="https://e.com""#));
        assert!(a.contains(r#"target="_blank""#));
        assert!(a.contains(r#"rel="noopener""#));
        assert!(a.contains("查看原文"));
    }

    #[test]
    fn test_image() {
        let img = image("shots/a.png", "A", "screenshot");
        assert_eq!(
            img,
            r#"<img class="screenshot" src="shots/a.png" alt="A">"#
        );
    }
}
