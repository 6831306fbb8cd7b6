/// Ordered HTML attributes. Rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// An element of the output HTML tree.
///
/// Parents own their children exclusively; the tree has no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children. `tag: None` renders as raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// A container node. An empty `children` list renders as an empty element pair.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged literal text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    /// A tagged leaf such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute, keeping earlier ones in place.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a Parent; a Leaf has none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }
}
