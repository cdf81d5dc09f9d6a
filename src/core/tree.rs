//! Hierarchy views derived from the flat entry table.
//!
//! Every function here is a pure read over a slice of entries; nothing is
//! cached, so views can never go stale after a delete.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::core::error::TreeError;
use crate::models::{Entry, EntryId};

/// Find an entry by id.
pub fn find<'a>(entries: &'a [Entry], id: &EntryId) -> Option<&'a Entry> {
    entries.iter().find(|e| &e.id == id)
}

/// Direct children of `parent` (`None` for roots), in table order.
pub fn children_of<'a>(entries: &'a [Entry], parent: Option<&EntryId>) -> Vec<&'a Entry> {
    entries.iter().filter(|e| e.is_child_of(parent)).collect()
}

/// Top-level entries, in table order.
pub fn root_items(entries: &[Entry]) -> Vec<&Entry> {
    children_of(entries, None)
}

/// The entry followed by its ancestors, nearest first.
///
/// The walk stops at a root or at a parent id that no longer resolves.
pub fn ancestor_chain<'a>(entries: &'a [Entry], id: &EntryId) -> Result<Vec<&'a Entry>, TreeError> {
    let mut current = find(entries, id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
    let mut seen = HashSet::new();
    let mut chain = Vec::new();

    loop {
        if !seen.insert(&current.id) {
            log::error!("parent cycle through {}", current.id);
            return Err(TreeError::Cycle(current.id.clone()));
        }
        chain.push(current);
        match current.parent_id.as_ref().and_then(|pid| find(entries, pid)) {
            Some(parent) => current = parent,
            None => return Ok(chain),
        }
    }
}

/// Slash-joined names from the root down to `id` (e.g. `src/lib/main.py`).
pub fn full_path(entries: &[Entry], id: &EntryId) -> Result<String, TreeError> {
    let chain = ancestor_chain(entries, id)?;
    let names: Vec<&str> = chain.iter().rev().map(|e| e.name.as_str()).collect();
    Ok(names.join("/"))
}

/// Ids of every transitive descendant of `id` (excluding `id` itself).
///
/// Breadth-first; only folders are expanded since files never parent.
pub fn descendants_of(entries: &[Entry], id: &EntryId) -> Vec<EntryId> {
    let mut result = Vec::new();
    let mut visited: HashSet<&EntryId> = HashSet::from([id]);
    let mut queue = VecDeque::from([id]);

    while let Some(parent) = queue.pop_front() {
        for child in entries.iter().filter(|e| e.parent_id.as_ref() == Some(parent)) {
            if !visited.insert(&child.id) {
                continue;
            }
            result.push(child.id.clone());
            if child.is_folder() {
                queue.push_back(&child.id);
            }
        }
    }

    result
}

/// One visible line of a rendered tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeRow<'a> {
    pub depth: usize,
    pub entry: &'a Entry,
}

/// Depth-first rows of the tree as a sidebar shows it: children of closed
/// folders are hidden.
pub fn visible_rows(entries: &[Entry]) -> Vec<TreeRow<'_>> {
    fn walk<'a>(
        entries: &'a [Entry],
        parent: Option<&EntryId>,
        depth: usize,
        visited: &mut HashSet<&'a EntryId>,
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        for entry in children_of(entries, parent) {
            if !visited.insert(&entry.id) {
                continue;
            }
            rows.push(TreeRow { depth, entry });
            if entry.is_open() {
                walk(entries, Some(&entry.id), depth + 1, visited, rows);
            }
        }
    }

    let mut rows = Vec::new();
    walk(entries, None, 0, &mut HashSet::new(), &mut rows);
    rows
}
