//! Section hierarchy: the template shape, the typed tree, and its export rules.
//!
//! Templates and results travel as [`SectionNode`] values (`name`, optional `text`,
//! optional `children`), the nested shape the store keeps. Inside the engine the
//! same hierarchy is a [`SectionsTree`] of [`Section`] values, where a node is
//! either a content-bearing leaf or an organizational node with children.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Nested section structure as stored: templates in, results out.
pub struct SectionNode {
    /// Section name; the root carries the document-type label.
    pub name: String,
    /// Leaf content; present only on leaves, empty in templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered subsections; present only on internal nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionNode>,
}

impl SectionNode {
    #[must_use]
    /// Leaf node with the given text.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Internal node owning `children`.
    pub fn internal(name: impl Into<String>, children: Vec<SectionNode>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children,
        }
    }

    /// Check that every node has a name and exactly one of text or children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] for the first offending node in pre-order.
    pub fn validate(&self) -> Result<()> {
        Section::from_node(self, "").map(|_| ())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A node of the section hierarchy.
pub enum Section {
    /// Content-bearing section, the unit of text assignment.
    Leaf {
        /// Section name matched against document headings.
        name: String,
        /// Assigned content; empty until the filler finds a match.
        text: String,
    },
    /// Organizational section grouping subsections.
    Internal {
        /// Section name.
        name: String,
        /// Subsections in template order.
        children: Vec<Section>,
    },
}

impl Section {
    fn from_node(node: &SectionNode, parent_path: &str) -> Result<Self> {
        let path = if parent_path.is_empty() {
            node.name.clone()
        } else {
            format!("{parent_path}/{}", node.name)
        };
        let invalid = |reason: &str| Error::InvalidTemplate {
            path: path.clone(),
            reason: reason.to_string(),
        };

        if node.name.trim().is_empty() {
            return Err(invalid("section name is empty"));
        }
        match (&node.text, node.children.is_empty()) {
            (Some(_), false) => Err(invalid("section has both text and children")),
            (None, true) => Err(invalid("section has neither text nor children")),
            (Some(text), true) => Ok(Self::Leaf {
                name: node.name.clone(),
                text: text.clone(),
            }),
            (None, false) => {
                let children = node
                    .children
                    .iter()
                    .map(|child| Self::from_node(child, &path))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Internal {
                    name: node.name.clone(),
                    children,
                })
            }
        }
    }

    fn to_node(&self) -> SectionNode {
        match self {
            Self::Leaf { name, text } => SectionNode::leaf(name.clone(), text.clone()),
            Self::Internal { name, children } => {
                SectionNode::internal(name.clone(), children.iter().map(Self::to_node).collect())
            }
        }
    }

    #[must_use]
    /// Section name.
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name, .. } | Self::Internal { name, .. } => name,
        }
    }

    #[must_use]
    /// Leaf text, `None` for internal sections.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Leaf { text, .. } => Some(text),
            Self::Internal { .. } => None,
        }
    }

    #[must_use]
    /// Subsections, empty for leaves.
    pub fn children(&self) -> &[Section] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Internal { children, .. } => children,
        }
    }

    #[must_use]
    /// Whether this section carries text.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    #[must_use]
    /// Pre-order traversal starting at this section.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Copy of this section without empty leaves, or `None` if nothing survives.
    ///
    /// Internal sections left without children are dropped as well.
    fn pruned(&self) -> Option<Self> {
        match self {
            Self::Leaf { text, .. } if text.is_empty() => None,
            Self::Leaf { .. } => Some(self.clone()),
            Self::Internal { name, children } => {
                let children: Vec<Self> = children.iter().filter_map(Self::pruned).collect();
                if children.is_empty() {
                    None
                } else {
                    Some(Self::Internal {
                        name: name.clone(),
                        children,
                    })
                }
            }
        }
    }

    fn for_each_leaf_mut<F: FnMut(&str, &mut String)>(&mut self, f: &mut F) {
        match self {
            Self::Leaf { name, text } => f(name.as_str(), text),
            Self::Internal { children, .. } => {
                for child in children {
                    child.for_each_leaf_mut(f);
                }
            }
        }
    }
}

/// Pre-order iterator over a section subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Section>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.stack.pop()?;
        self.stack.extend(section.children().iter().rev());
        Some(section)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The section hierarchy of one document, filled in place during reconciliation.
pub struct SectionsTree {
    root: Section,
}

impl SectionsTree {
    /// Import a template, refusing structurally invalid ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] if any node violates the leaf-or-children rule.
    pub fn new(template: &SectionNode) -> Result<Self> {
        Ok(Self {
            root: Section::from_node(template, "")?,
        })
    }

    #[must_use]
    /// Root section.
    pub fn root(&self) -> &Section {
        &self.root
    }

    #[must_use]
    /// Leaves in pre-order.
    pub fn leaves(&self) -> Vec<&Section> {
        self.root.iter().filter(|s| s.is_leaf()).collect()
    }

    #[must_use]
    /// Leaf names in pre-order; index `i` matches [`Self::leaves`] and [`Self::set_leaf_text`].
    pub fn leaf_names(&self) -> Vec<&str> {
        self.root
            .iter()
            .filter(|s| s.is_leaf())
            .map(Section::name)
            .collect()
    }

    #[must_use]
    /// Text of the `index`-th leaf in pre-order.
    pub fn leaf_text(&self, index: usize) -> Option<&str> {
        self.root
            .iter()
            .filter(|s| s.is_leaf())
            .nth(index)
            .and_then(Section::text)
    }

    /// Replace the text of the `index`-th leaf in pre-order.
    ///
    /// Returns `false` if there is no such leaf.
    pub fn set_leaf_text(&mut self, index: usize, text: &str) -> bool {
        let mut current = 0;
        let mut found = false;
        self.root.for_each_leaf_mut(&mut |_, leaf_text| {
            if current == index {
                leaf_text.clear();
                leaf_text.push_str(text);
                found = true;
            }
            current += 1;
        });
        found
    }

    #[must_use]
    /// First section named `name` in pre-order.
    pub fn find(&self, name: &str) -> Option<&Section> {
        self.root.iter().find(|s| s.name() == name)
    }

    #[must_use]
    /// Text of all non-empty leaves under the named section (the root when `None`),
    /// in pre-order, joined with a space. Unknown names yield an empty string.
    pub fn get_content(&self, section_name: Option<&str>) -> String {
        let scope = match section_name {
            Some(name) => match self.find(name) {
                Some(section) => section,
                None => return String::new(),
            },
            None => &self.root,
        };
        scope
            .iter()
            .filter_map(Section::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    /// Rebuilt tree holding only filled leaves and the sections that contain them.
    ///
    /// The root is always kept, with no children if nothing was filled. Such a bare
    /// root is not a valid template: [`SectionNode::validate`] rejects it.
    pub fn pruned(&self) -> Self {
        let root = self.root.pruned().unwrap_or_else(|| Section::Internal {
            name: self.root.name().to_string(),
            children: Vec::new(),
        });
        Self { root }
    }

    #[must_use]
    /// Nested structure of the tree as it stands, without pruning.
    pub fn to_node(&self) -> SectionNode {
        self.root.to_node()
    }

    #[must_use]
    /// Final result: the pruned tree in template shape.
    ///
    /// It re-imports as a template only when at least one leaf was filled.
    pub fn export(&self) -> SectionNode {
        self.pruned().to_node()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
