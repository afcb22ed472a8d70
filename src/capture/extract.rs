use smallvec::SmallVec;

use crate::pattern::CompiledPattern;

use super::node::{CaptureElement, CaptureNode, CaptureTree};
use super::shim::{GroupOpen, class_end, classify_group, strip_shim};
use super::{CaptureError, CaptureResult};

const ROOT: usize = 0;

/// Mutable build-time record; frozen into a [`CaptureNode`] once the scan
/// is complete.
#[derive(Debug, Default)]
struct NodeRecord {
    name: Option<String>,
    optional: bool,
    children: Vec<Slot>,
}

#[derive(Debug)]
enum Slot {
    Text(String),
    Node(usize),
    EndAnchor,
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Capture(usize),
    /// A non-capturing group; its parens stay in the enclosing node's text.
    Transparent,
}

/// Capture tree of a compiled pattern, named through its side table.
pub fn extract_tree(pattern: &CompiledPattern) -> CaptureResult<CaptureTree> {
    extract_tree_with_names(pattern.regex().as_str(), pattern.names())
}

/// Capture tree of a raw anchored source in either name syntax.
pub fn extract_tree_from_source(source: &str) -> CaptureResult<CaptureTree> {
    let (clean, names) = strip_shim(source)?;
    extract_tree_with_names(&clean, &names)
}

/// Scans `source` once, left to right, assigning `names[i]` to the i-th
/// capturing group. `source` must start with `^` and be free of shim
/// markers.
#[tracing::instrument(level = "trace", skip(source, names), fields(source_len=source.len() as u64, names=names.len() as u64))]
pub fn extract_tree_with_names(
    source: &str,
    names: &[Option<String>],
) -> CaptureResult<CaptureTree> {
    let Some(body) = source.strip_prefix('^') else {
        return Err(CaptureError::NotAnchored {
            pattern: source.to_string(),
        });
    };

    let mut arena = vec![NodeRecord::default()];
    let mut stack: SmallVec<[Frame; 8]> = SmallVec::new();
    stack.push(Frame::Capture(ROOT));
    let mut current = ROOT;
    let mut next_name = names.iter();
    let mut group_count = 0usize;
    // offsets below are reported relative to `source`
    let base = 1usize;
    let mut idx = 0usize;

    while let Some(ch) = body[idx..].chars().next() {
        match ch {
            '\\' => {
                let Some(escaped) = body[idx + 1..].chars().next() else {
                    return Err(CaptureError::TrailingEscape {
                        pattern: source.to_string(),
                    });
                };
                let end = idx + 1 + escaped.len_utf8();
                push_text(&mut arena[current], &body[idx..end]);
                idx = end;
            }
            '[' => {
                let end = class_end(body, idx).map_err(|_| CaptureError::UnterminatedClass {
                    pattern: source.to_string(),
                    index: base + idx,
                })?;
                push_text(&mut arena[current], &body[idx..end]);
                idx = end;
            }
            '(' => {
                let open = classify_group(&body[idx + 1..]);
                if !open.is_capturing() {
                    push_text(&mut arena[current], "(");
                    stack.push(Frame::Transparent);
                    idx += 1;
                    continue;
                }

                group_count += 1;
                let name = next_name
                    .next()
                    .ok_or_else(|| CaptureError::NameListExhausted {
                        pattern: source.to_string(),
                        group: group_count,
                    })?
                    .clone();
                let marker_len = match open {
                    GroupOpen::Native { marker_len, .. } | GroupOpen::Shim { marker_len, .. } => {
                        marker_len
                    }
                    _ => 0,
                };

                let child = arena.len();
                arena.push(NodeRecord {
                    name,
                    ..NodeRecord::default()
                });
                arena[current].children.push(Slot::Node(child));
                stack.push(Frame::Capture(child));
                current = child;
                idx += 1 + marker_len;
            }
            ')' => {
                if stack.len() == 1 {
                    return Err(CaptureError::UnbalancedClose {
                        pattern: source.to_string(),
                        index: base + idx,
                    });
                }
                idx += 1;
                match stack.pop() {
                    Some(Frame::Capture(closed)) => {
                        current = innermost_capture(&stack);
                        if body[idx..].starts_with('?') {
                            arena[closed].optional = true;
                            idx += 1;
                        }
                    }
                    _ => push_text(&mut arena[current], ")"),
                }
            }
            '$' => {
                arena[current].children.push(Slot::EndAnchor);
                idx += 1;
            }
            _ => {
                let end = idx + ch.len_utf8();
                push_text(&mut arena[current], &body[idx..end]);
                idx = end;
            }
        }
    }

    if stack.len() != 1 {
        return Err(CaptureError::UnclosedGroup {
            pattern: source.to_string(),
            open: stack.len() - 1,
        });
    }

    let root = std::mem::take(&mut arena[ROOT]);
    Ok(CaptureTree::new(freeze_children(&mut arena, root.children)))
}

fn innermost_capture(stack: &[Frame]) -> usize {
    stack
        .iter()
        .rev()
        .find_map(|frame| match frame {
            Frame::Capture(idx) => Some(*idx),
            Frame::Transparent => None,
        })
        .unwrap_or(ROOT)
}

fn push_text(record: &mut NodeRecord, text: &str) {
    if let Some(Slot::Text(existing)) = record.children.last_mut() {
        existing.push_str(text);
    } else {
        record.children.push(Slot::Text(text.to_string()));
    }
}

fn freeze_children(arena: &mut [NodeRecord], slots: Vec<Slot>) -> Vec<CaptureElement> {
    slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Text(text) => CaptureElement::Text(text),
            Slot::EndAnchor => CaptureElement::EndAnchor,
            Slot::Node(idx) => {
                let record = std::mem::take(&mut arena[idx]);
                let children = freeze_children(arena, record.children);
                CaptureElement::Node(CaptureNode::new(record.name, record.optional, children))
            }
        })
        .collect()
}
