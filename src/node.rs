//! Immutable style chains.

use std::sync::Arc;

use crate::codes::StyleCodes;

/// One applied style layer.
///
/// Nodes form a persistent tree: each node holds a shared link to its
/// parent, so any number of chains can branch off the same base without
/// copying it. A node is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNode {
    open: String,
    close: String,
    open_all: String,
    close_all: String,
    parent: Option<Arc<StyleNode>>,
}

impl StyleNode {
    /// Creates a node on top of `parent` (or a root node if `None`).
    ///
    /// `open_all` appends this layer's open code to the parent's, while
    /// `close_all` prepends the close code so the innermost layer closes first.
    pub fn extend(parent: Option<&Arc<StyleNode>>, open: &str, close: &str) -> Arc<StyleNode> {
        let (open_all, close_all) = match parent {
            Some(p) => (
                format!("{}{}", p.open_all, open),
                format!("{}{}", close, p.close_all),
            ),
            None => (open.to_string(), close.to_string()),
        };

        Arc::new(StyleNode {
            open: open.to_string(),
            close: close.to_string(),
            open_all,
            close_all,
            parent: parent.cloned(),
        })
    }

    /// Convenience wrapper over [`StyleNode::extend`] taking a code pair.
    pub fn with_codes(parent: Option<&Arc<StyleNode>>, codes: &StyleCodes) -> Arc<StyleNode> {
        Self::extend(parent, &codes.open, &codes.close)
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Open codes of every layer from the root down to this one.
    pub fn open_all(&self) -> &str {
        &self.open_all
    }

    /// Close codes of every layer from this one up to the root.
    pub fn close_all(&self) -> &str {
        &self.close_all
    }

    pub fn parent(&self) -> Option<&Arc<StyleNode>> {
        self.parent.as_ref()
    }

    /// Iterates from this node up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Number of layers in the chain ending at this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

/// Iterator over a chain, innermost node first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a StyleNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a StyleNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
