//! Plain-text outline of a section tree.

use crate::section::SectionNode;

const PREVIEW_CHARS: usize = 60;

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(level: usize, is_last: bool, parent_states: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for i in 0..level.saturating_sub(1) {
        if parent_states.get(i).copied().unwrap_or(false) {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

/// First line of `text`, shortened to a fixed number of characters.
fn preview(text: &str) -> String {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    } else {
        line.to_string()
    }
}

fn render_node(
    node: &SectionNode,
    level: usize,
    is_last: bool,
    parent_states: &mut Vec<bool>,
    out: &mut String,
) {
    out.push_str(&get_tree_prefix(level, is_last, parent_states));
    out.push_str(&node.name);
    if let Some(text) = node.text.as_deref().filter(|t| !t.trim().is_empty()) {
        out.push_str(": ");
        out.push_str(&preview(text));
    }
    out.push('\n');

    if level > 0 {
        parent_states.push(!is_last);
    }
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, level + 1, i + 1 == count, parent_states, out);
    }
    if level > 0 {
        parent_states.pop();
    }
}

#[must_use]
/// Box-drawing outline of `root`, one section per line, leaves with a text preview.
pub fn render_outline(root: &SectionNode) -> String {
    let mut out = String::new();
    render_node(root, 0, true, &mut Vec::new(), &mut out);
    out
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
