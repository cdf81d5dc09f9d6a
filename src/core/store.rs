//! The entry table backing the virtual filesystem.
//!
//! Entries live in a single `Rc<Vec<Entry>>`. Every mutation builds a new
//! vector (map, filter or append) and swaps the pointer, so a snapshot taken
//! with [`EntryStore::snapshot`] is never observed half-updated.

use std::collections::HashSet;
use std::rc::Rc;

use crate::config::{COPY_SUFFIX, DEFAULT_FILE_STEM, DEFAULT_FOLDER_NAME};
use crate::core::tree;
use crate::models::{Entry, EntryData, EntryId, EntryKind, Language, split_extension};

/// What to create with [`EntryStore::create`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewEntry {
    /// A file seeded with the language's template and extension.
    File(Language),
    /// An expanded, empty folder.
    Folder,
}

/// Flat, id-keyed table of files and folders.
#[derive(Clone, Debug)]
pub struct EntryStore {
    entries: Rc<Vec<Entry>>,
    /// Every id handed out this session, including deleted ones.
    issued: HashSet<EntryId>,
    next_seq: u64,
}

impl EntryStore {
    /// Create a store from existing entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        let issued = entries.iter().map(|e| e.id.clone()).collect();
        Self {
            entries: Rc::new(entries),
            issued,
            next_seq: 1,
        }
    }

    /// Store seeded with the startup project tree.
    pub fn sample() -> Self {
        Self::new(vec![
            Entry::folder("folder-1", "src", None, true),
            Entry::folder("folder-2", "docs", None, false),
            Entry::file(
                "file-1",
                "untitled.py",
                Some("folder-1".into()),
                ".py",
                "print(\"Hello, World!\")",
            ),
            Entry::file(
                "file-2",
                "readme.md",
                Some("folder-2".into()),
                ".md",
                "# Project Documentation",
            ),
        ])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Shared handle to the current table; unaffected by later mutations.
    pub fn snapshot(&self) -> Rc<Vec<Entry>> {
        Rc::clone(&self.entries)
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        tree::find(&self.entries, id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Whole-table replacement primitives
    // =========================================================================

    fn swap(&mut self, next: Vec<Entry>) {
        self.entries = Rc::new(next);
    }

    fn map_where(&mut self, pred: impl Fn(&Entry) -> bool, f: impl Fn(&Entry) -> Entry) {
        let next = self
            .entries
            .iter()
            .map(|e| if pred(e) { f(e) } else { e.clone() })
            .collect();
        self.swap(next);
    }

    fn append(&mut self, entry: Entry) {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend(self.entries.iter().cloned());
        next.push(entry);
        self.swap(next);
    }

    // =========================================================================
    // Naming
    // =========================================================================

    fn fresh_id(&mut self, kind: EntryKind) -> EntryId {
        loop {
            let candidate = EntryId::new(format!("{}-{}", kind.id_prefix(), self.next_seq));
            self.next_seq += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn sibling_name_taken(&self, parent: Option<&EntryId>, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.is_child_of(parent) && e.name == name)
    }

    /// First free name among `parent`'s children: `candidate(0)`, then
    /// `candidate(1)`, `candidate(2)`, ...
    fn unique_name(&self, parent: Option<&EntryId>, candidate: impl Fn(usize) -> String) -> String {
        (0..)
            .map(&candidate)
            .find(|name| !self.sibling_name_taken(parent, name))
            .unwrap_or_else(|| candidate(0))
    }

    fn file_name_candidates(stem: &str, ext: &str) -> impl Fn(usize) -> String {
        let (stem, ext) = (stem.to_string(), ext.to_string());
        move |n| match n {
            0 => format!("{stem}{ext}"),
            n => format!("{stem}{n}{ext}"),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Append a new file or folder under `parent`.
    ///
    /// `name_hint` is the file stem or folder name to start from. Returns
    /// `None` when `parent` is not an existing folder.
    pub fn create(
        &mut self,
        kind: NewEntry,
        parent: Option<&EntryId>,
        name_hint: Option<&str>,
    ) -> Option<Entry> {
        if let Some(pid) = parent
            && !self.get(pid).is_some_and(Entry::is_folder)
        {
            log::debug!("create skipped: {pid} is not a folder");
            return None;
        }

        let hint = name_hint.map(str::trim).filter(|h| !h.is_empty());
        let entry = match kind {
            NewEntry::File(language) => {
                let ext = language.extension();
                let stem = hint
                    .map(|h| h.strip_suffix(ext).unwrap_or(h))
                    .unwrap_or(DEFAULT_FILE_STEM);
                let name = self.unique_name(parent, Self::file_name_candidates(stem, ext));
                let id = self.fresh_id(EntryKind::File);
                Entry::file(id, name, parent.cloned(), ext, language.template())
            }
            NewEntry::Folder => {
                let base = hint.unwrap_or(DEFAULT_FOLDER_NAME).to_string();
                let name = self.unique_name(parent, |n| match n {
                    0 => base.clone(),
                    n => format!("{base} {n}"),
                });
                let id = self.fresh_id(EntryKind::Folder);
                Entry::folder(id, name, parent.cloned(), true)
            }
        };

        log::debug!("created {} {:?}", entry.id, entry.name);
        self.append(entry.clone());
        Some(entry)
    }

    /// Remove `id` and all of its descendants in one swap.
    ///
    /// Returns the removed entries, the target first.
    pub fn delete(&mut self, id: &EntryId) -> Option<Vec<Entry>> {
        let target = self.get(id)?.clone();
        let mut doomed: HashSet<EntryId> = tree::descendants_of(&self.entries, id)
            .into_iter()
            .collect();
        doomed.insert(id.clone());

        let (removed, kept): (Vec<Entry>, Vec<Entry>) = self
            .entries
            .iter()
            .cloned()
            .partition(|e| doomed.contains(&e.id));
        self.swap(kept);

        let mut result = vec![target];
        result.extend(removed.into_iter().filter(|e| &e.id != id));
        log::debug!("deleted {} ({} entries)", id, result.len());
        Some(result)
    }

    /// Rename an entry.
    ///
    /// Files take their extension from the text after the last dot of
    /// `new_name`, keeping the old extension when there is none. Folders are
    /// renamed verbatim.
    pub fn rename(&mut self, id: &EntryId, new_name: &str) -> Option<Entry> {
        self.get(id)?;
        self.map_where(
            |e| &e.id == id,
            |e| {
                let mut next = e.clone();
                match &mut next.data {
                    EntryData::File { extension, .. } => {
                        let (stem, new_ext) = split_extension(new_name);
                        if let Some(new_ext) = new_ext {
                            *extension = new_ext.to_string();
                        }
                        next.name = format!("{stem}{extension}");
                    }
                    EntryData::Folder { .. } => next.name = new_name.to_string(),
                }
                next
            },
        );
        self.get(id).cloned()
    }

    /// Copy a file next to itself as `<stem>-copy<ext>`.
    pub fn duplicate(&mut self, id: &EntryId) -> Option<Entry> {
        let source = self.get(id).filter(|e| e.is_file())?.clone();
        let (stem, ext) = split_extension(&source.name);
        let ext = ext.unwrap_or_default();
        let copy_stem = format!("{stem}{COPY_SUFFIX}");
        let name = self.unique_name(
            source.parent_id.as_ref(),
            Self::file_name_candidates(&copy_stem, ext),
        );

        let entry = Entry {
            id: self.fresh_id(EntryKind::File),
            name,
            parent_id: source.parent_id.clone(),
            data: source.data.clone(),
        };
        self.append(entry.clone());
        Some(entry)
    }

    /// Flip a folder's expansion state. Returns the new state.
    pub fn toggle_open(&mut self, id: &EntryId) -> Option<bool> {
        let open = !self.get(id).filter(|e| e.is_folder())?.is_open();
        self.set_open(&HashSet::from([id.clone()]), open);
        Some(open)
    }

    /// Expand `id` (if it is a folder) and every folder above it.
    pub fn open_ancestors(&mut self, id: &EntryId) {
        let chain: HashSet<EntryId> = match tree::ancestor_chain(&self.entries, id) {
            Ok(chain) => chain.into_iter().map(|e| e.id.clone()).collect(),
            Err(err) => {
                log::warn!("open_ancestors({id}): {err}");
                return;
            }
        };
        self.set_open(&chain, true);
    }

    fn set_open(&mut self, ids: &HashSet<EntryId>, open: bool) {
        self.map_where(
            |e| e.is_folder() && ids.contains(&e.id),
            |e| Entry {
                data: EntryData::Folder { is_open: open },
                ..e.clone()
            },
        );
    }

    /// Replace a file's content. Returns whether a file was updated.
    pub fn set_content(&mut self, id: &EntryId, content: &str) -> bool {
        if !self.get(id).is_some_and(Entry::is_file) {
            return false;
        }
        self.map_where(
            |e| &e.id == id,
            |e| {
                let mut next = e.clone();
                if let EntryData::File { content: c, .. } = &mut next.data {
                    *c = content.to_string();
                }
                next
            },
        );
        true
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::sample()
    }
}
