use crate::pattern::NamedCaptureSyntax;

use super::shim::open_named_group;

/// One item in a group's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureElement {
    /// Regex source between groups, kept verbatim (escapes included).
    Text(String),
    Node(CaptureNode),
    /// Unescaped `$`.
    EndAnchor,
}

/// A capturing group of a compiled pattern. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureNode {
    name: Option<String>,
    optional: bool,
    children: Box<[CaptureElement]>,
}

impl CaptureNode {
    pub(crate) fn new(name: Option<String>, optional: bool, children: Vec<CaptureElement>) -> Self {
        Self {
            name,
            optional,
            children: children.into_boxed_slice(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// True when the group was followed by `?`.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn children(&self) -> &[CaptureElement] {
        &self.children
    }

    fn render(&self, out: &mut String, syntax: NamedCaptureSyntax) {
        match &self.name {
            Some(name) => open_named_group(out, name, syntax),
            None => out.push('('),
        }
        render_elements(&self.children, out, syntax);
        out.push(')');
        if self.optional {
            out.push('?');
        }
    }
}

/// Top-level result of capture tree extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureTree {
    elements: Box<[CaptureElement]>,
}

impl CaptureTree {
    pub(crate) fn new(elements: Vec<CaptureElement>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    pub fn elements(&self) -> &[CaptureElement] {
        &self.elements
    }

    /// Every node, depth first, which is the order of their opening
    /// parentheses in the source.
    pub fn nodes(&self) -> Vec<&CaptureNode> {
        let mut out = Vec::new();
        collect_nodes(&self.elements, &mut out);
        out
    }

    /// Names of every node in opening-parenthesis order.
    pub fn names(&self) -> Vec<Option<&str>> {
        self.nodes().into_iter().map(CaptureNode::name).collect()
    }

    /// Names of the named nodes only.
    pub fn param_names(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter_map(CaptureNode::name)
            .collect()
    }

    /// Serialises the tree back into an anchored pattern source.
    pub fn to_source(&self, syntax: NamedCaptureSyntax) -> String {
        let mut out = String::from("^");
        render_elements(&self.elements, &mut out, syntax);
        out
    }
}

fn collect_nodes<'a>(elements: &'a [CaptureElement], out: &mut Vec<&'a CaptureNode>) {
    for element in elements {
        if let CaptureElement::Node(node) = element {
            out.push(node);
            collect_nodes(node.children(), out);
        }
    }
}

fn render_elements(elements: &[CaptureElement], out: &mut String, syntax: NamedCaptureSyntax) {
    for element in elements {
        match element {
            CaptureElement::Text(text) => out.push_str(text),
            CaptureElement::Node(node) => node.render(out, syntax),
            CaptureElement::EndAnchor => out.push('$'),
        }
    }
}
