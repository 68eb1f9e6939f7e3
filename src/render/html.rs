//! Escaped HTML fragments

use std::fmt;

/// A fragment of markup that is safe to inject.
///
/// Outside this crate the only constructor is [`Html::text`], which
/// escapes; raw markup comes solely from the template functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// Escaped text node
    pub fn text(s: &str) -> Self {
        Html(escape(s))
    }

    /// Markup assembled by a template from escaped parts
    pub(crate) fn trusted(markup: String) -> Self {
        Html(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut markup = String::new();
        for fragment in iter {
            markup.push_str(&fragment.0);
        }
        Html(markup)
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
