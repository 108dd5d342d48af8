/// Text processing utilities for feed descriptions
pub mod text {
    /// Strip HTML tags, unescape common entities, collapse whitespace, and
    /// truncate to `max_len` characters.
    pub fn clean_html(html: &str, max_len: usize) -> String {
        let stripped = strip_tags(html);
        let unescaped = unescape_entities(&stripped);
        let collapsed = unescaped.split_whitespace().collect::<Vec<_>>().join(" ");
        truncate(&collapsed, max_len)
    }

    /// Remove HTML tags, keeping only text content.
    pub fn strip_tags(html: &str) -> String {
        html.chars()
            .fold((String::new(), false), |(mut out, in_tag), c| match c {
                '<' => (out, true),
                '>' => (out, false),
                _ if !in_tag => {
                    out.push(c);
                    (out, in_tag)
                }
                _ => (out, in_tag),
            })
            .0
    }

    /// Unescape the entities that commonly appear in feed descriptions.
    pub fn unescape_entities(text: &str) -> String {
        text.replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&apos;", "'")
            .replace("&nbsp;", " ")
    }

    /// Truncate to `max_len` characters with an ellipsis, breaking on a char
    /// boundary.
    pub fn truncate(text: &str, max_len: usize) -> String {
        if text.chars().count() <= max_len {
            return text.to_string();
        }
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}
