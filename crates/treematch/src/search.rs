//! The search driver (spec §4.4): a pre-order walk that tries a compiled
//! pattern at every position of every sequence in the tree, invoking a
//! callback on each match and re-descending into the current (possibly
//! mutated) contents afterward.

use indexmap::IndexMap;
use treematch_core::Element;
use treematch_vm::{RuntimeError, Vm};

use crate::match_obj::Match;
use crate::pattern::Pattern;
use crate::span::Span;

fn resolve<'a>(root: &'a Element, path: &[usize]) -> &'a Element {
    let mut current = root;
    for &idx in path {
        current = &current
            .as_seq()
            .expect("search path descends through a non-sequence element")[idx];
    }
    current
}

/// Walk `root` in pre-order, trying `pattern` at every index of every
/// sequence encountered. `on_match` receives the match and the tree's root
/// (so it can call [`Match::replace`]/[`Match::swap`]) and returns where the
/// scan should resume: `Some(k)` resumes at index `k`, `None` resumes right
/// after the match (spec §4.4 "Continuation control").
pub fn search(
    root: &mut Element,
    pattern: &Pattern,
    mut on_match: impl FnMut(&mut Match, &mut Element) -> Option<usize>,
) -> Result<(), RuntimeError> {
    let mut path = Vec::new();
    search_at(root, &mut path, pattern, &mut on_match)
}

fn search_at(
    root: &mut Element,
    path: &mut Vec<usize>,
    pattern: &Pattern,
    on_match: &mut dyn FnMut(&mut Match, &mut Element) -> Option<usize>,
) -> Result<(), RuntimeError> {
    let mut i = 0;
    loop {
        let len = match resolve(root, path).as_seq() {
            Some(children) => children.len(),
            None => break,
        };
        if i > len {
            break;
        }

        let outcome = {
            let node = resolve(root, path);
            let mut vm = Vm::with_limits(pattern.limits());
            vm.run(pattern.program(), node, i)?
        };

        match outcome {
            Some(outcome) => {
                let default_next = outcome.end;
                let groups: IndexMap<String, Span> = outcome
                    .captures
                    .iter()
                    .filter_map(|(gid, capture)| {
                        pattern.group_name(gid).map(|name| {
                            let mut absolute = path.clone();
                            absolute.extend(&capture.path);
                            (
                                name.to_string(),
                                Span {
                                    path: absolute,
                                    start: capture.start,
                                    end: capture.end,
                                },
                            )
                        })
                    })
                    .collect();
                let span = Span {
                    path: path.clone(),
                    start: i,
                    end: outcome.end,
                };
                let mut m = Match::new(span, groups);
                i = on_match(&mut m, root).unwrap_or(default_next);
            }
            None => i += 1,
        }
    }

    let mut idx = 0;
    loop {
        let count = match resolve(root, path).as_seq() {
            Some(children) => children.len(),
            None => break,
        };
        if idx >= count {
            break;
        }
        let descend = resolve(root, path)
            .as_seq()
            .map(|children| children[idx].is_seq())
            .unwrap_or(false);
        if descend {
            path.push(idx);
            search_at(root, path, pattern, on_match)?;
            path.pop();
        }
        idx += 1;
    }

    Ok(())
}
