use serde::Serialize;

/// The kind of an inline [`Span`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed unit of inline content.
///
/// Links and images always carry a target; the other kinds cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text outside any construct.
    Text(String),
    /// Content between `**` delimiters.
    Bold(String),
    /// Content between `_` delimiters.
    Italic(String),
    /// Content between backticks. Rendered literally.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Text(_) => SpanKind::Text,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// Literal text, anchor text for links, alt text for images.
    pub fn content(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) | Span::Italic(s) | Span::Code(s) => s,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Builds a delimited span of `kind` around `content`.
    ///
    /// Returns `None` for kinds that need a target.
    pub fn delimited(kind: SpanKind, content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        match kind {
            SpanKind::Text => Some(Span::Text(content)),
            SpanKind::Bold => Some(Span::Bold(content)),
            SpanKind::Italic => Some(Span::Italic(content)),
            SpanKind::Code => Some(Span::Code(content)),
            SpanKind::Link | SpanKind::Image => None,
        }
    }
}
