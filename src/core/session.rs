//! Navigation/session state for the document explorer.
//!
//! A [`Session`] holds the ordered stack of opened folders (the current
//! drill-down path), the active sort option, and the optional search-result
//! override. It is mutated only through the transition methods below; all
//! fetching stays in the composer ([`crate::app::AppContext`]), which keeps
//! this module DOM-free and natively testable.
//!
//! Stack shape: index 0 is always the synthetic root once the initial load
//! has completed. Closing to a shallower level truncates the stack to a
//! prefix, never reorders it. Search results supersede the stack for
//! rendering only; the stack resumes display unchanged when search is
//! cleared.

use crate::models::{Document, FolderRef, OpenedFolder, SortOption};

// =============================================================================
// Folder activation
// =============================================================================

/// What activating a rendered folder row should do.
///
/// Decided by [`Session::folder_action`]. `can_jump` reflects the row's
/// wiring: every folder row in the first rendered column carries the
/// jump-reset callback, as does the first search result (when it is a
/// folder); rows in deeper columns never do. Activating a wired row whose
/// folder is not the current second level resets the path to
/// `[root, target]` instead of appending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderAction {
    /// Close back to the root level, then open the target as level 1.
    JumpToRoot,
    /// Fetch the folder's listing and append it to the stack.
    OpenChild,
    /// The folder is already open at an acceptable position; do nothing.
    Ignore,
}

// =============================================================================
// Session
// =============================================================================

/// Explorer session state: opened-folder stack, sort option, search override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Drill-down path; index 0 is the root level.
    opened_folders: Vec<OpenedFolder>,
    /// Ordering applied to every held document sequence.
    sort: SortOption,
    /// When present, rendered instead of the stack.
    search_results: Option<Vec<Document>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The current drill-down path, shallowest level first.
    pub fn opened_folders(&self) -> &[OpenedFolder] {
        &self.opened_folders
    }

    /// Search results, when a search is active.
    pub fn search_results(&self) -> Option<&[Document]> {
        self.search_results.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.search_results.is_some()
    }

    /// Identity of the deepest opened folder (the header title).
    pub fn current_folder(&self) -> Option<&FolderRef> {
        self.opened_folders.last().map(|level| &level.parent)
    }

    /// A folder is open iff its id matches the parent id of some stack level.
    pub fn is_open(&self, folder_id: &str) -> bool {
        self.opened_folders
            .iter()
            .any(|level| level.parent.id == folder_id)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Initial load: replace the stack with the root level.
    ///
    /// Also used on remount, so a second load cannot grow the stack.
    pub fn load_root(&mut self, parent: FolderRef, mut children: Vec<Document>) {
        self.sort.apply(&mut children);
        self.opened_folders = vec![OpenedFolder { parent, children }];
    }

    /// Append one opened level with freshly fetched children.
    ///
    /// The append is unconditional: idempotence lives in [`Self::folder_action`],
    /// which never requests a fetch for an already-open folder. Raced fetches
    /// that both resolve therefore both append, in completion order.
    pub fn open_folder(&mut self, parent: FolderRef, mut children: Vec<Document>) {
        self.sort.apply(&mut children);
        self.opened_folders.push(OpenedFolder { parent, children });
    }

    /// Truncate the stack to the root level only.
    pub fn close_to_root(&mut self) {
        self.opened_folders.truncate(1);
    }

    /// Breadcrumb click: keep the prefix ending at `index`.
    ///
    /// Only allowed when the stack is deeper than one level.
    pub fn truncate_to(&mut self, index: usize) {
        if self.opened_folders.len() > 1 {
            self.opened_folders.truncate(index + 1);
        }
    }

    /// Change the sort option and re-order every held document sequence:
    /// each level's children and, if present, the search results.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        for level in &mut self.opened_folders {
            self.sort.apply(&mut level.children);
        }
        if let Some(results) = &mut self.search_results {
            self.sort.apply(results);
        }
    }

    /// Store fetched search results (sorted). The stack is not altered.
    pub fn set_search_results(&mut self, mut results: Vec<Document>) {
        self.sort.apply(&mut results);
        self.search_results = Some(results);
    }

    /// Drop the search override; display reverts to the stack.
    pub fn clear_search(&mut self) {
        self.search_results = None;
    }

    /// Decide what activating a folder row does (see [`FolderAction`]).
    pub fn folder_action(&self, folder_id: &str, can_jump: bool) -> FolderAction {
        let second_level = self
            .opened_folders
            .get(1)
            .map(|level| level.parent.id.as_str());

        if can_jump && second_level != Some(folder_id) {
            return FolderAction::JumpToRoot;
        }
        if self.is_open(folder_id) {
            FolderAction::Ignore
        } else {
            FolderAction::OpenChild
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortDirection, SortKey};

    fn folder(id: &str, name: &str) -> Document {
        Document {
            id: id.to_string(),
            name: name.to_string(),
            kind: "folder".to_string(),
            date_added: "2021-01-01".to_string(),
            size: "0".to_string(),
            ..Document::default()
        }
    }

    fn file(id: &str, name: &str) -> Document {
        Document {
            id: id.to_string(),
            name: name.to_string(),
            kind: "txt".to_string(),
            date_added: "2021-01-01".to_string(),
            size: "1".to_string(),
            path: Some("/files".to_string()),
            ..Document::default()
        }
    }

    fn root_ref() -> FolderRef {
        FolderRef::new("documents", "Documents")
    }

    /// Session with `[root, f1, f2]` opened.
    fn three_levels() -> Session {
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Pics"), file("d1", "Readme")]);
        session.open_folder(FolderRef::new("f1", "Pics"), vec![folder("f2", "Trips")]);
        session.open_folder(FolderRef::new("f2", "Trips"), vec![file("d2", "Itinerary")]);
        session
    }

    #[test]
    fn test_load_root_scenario() {
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Pics")]);

        assert_eq!(session.opened_folders().len(), 1);
        let root = &session.opened_folders()[0];
        assert_eq!(root.parent, root_ref());
        assert_eq!(root.children, vec![folder("f1", "Pics")]);
        assert_eq!(session.current_folder().unwrap().name, "Documents");
    }

    #[test]
    fn test_load_root_replaces_existing_stack() {
        let mut session = three_levels();
        session.load_root(root_ref(), vec![folder("f1", "Pics")]);
        assert_eq!(session.opened_folders().len(), 1);
    }

    #[test]
    fn test_open_folder_appends_one_level() {
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Pics")]);
        session.open_folder(FolderRef::new("f1", "Pics"), vec![]);

        assert_eq!(session.opened_folders().len(), 2);
        assert_eq!(session.opened_folders()[1].parent.id, "f1");
        assert!(session.is_open("f1"));
    }

    #[test]
    fn test_children_sorted_on_arrival() {
        // Default option is name-descending.
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Alpha"), folder("f2", "Beta")]);

        let names: Vec<&str> = session.opened_folders()[0]
            .children
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Beta", "Alpha"]);
    }

    #[test]
    fn test_folder_action_idempotent_open() {
        let session = three_levels();
        // f2 is already open and the row has no jump wiring: nothing to do.
        assert_eq!(session.folder_action("f2", false), FolderAction::Ignore);
    }

    #[test]
    fn test_folder_action_opens_unopened_child() {
        let session = three_levels();
        assert_eq!(session.folder_action("f9", false), FolderAction::OpenChild);
    }

    #[test]
    fn test_folder_action_jump_resets_branch() {
        let session = three_levels();
        // A wired row whose folder is not the current second level jumps,
        // even from a deep stack.
        assert_eq!(session.folder_action("f9", true), FolderAction::JumpToRoot);
        // Even when the target is open deeper in the stack.
        assert_eq!(session.folder_action("f2", true), FolderAction::JumpToRoot);
    }

    #[test]
    fn test_folder_action_no_jump_for_current_second_level() {
        let session = three_levels();
        // The wired row matches the current second level: falls through to
        // the idempotent-open check.
        assert_eq!(session.folder_action("f1", true), FolderAction::Ignore);
    }

    #[test]
    fn test_truncate_to_keeps_prefix() {
        let mut session = three_levels();
        let expected: Vec<OpenedFolder> = session.opened_folders()[..2].to_vec();

        session.truncate_to(1);
        assert_eq!(session.opened_folders(), expected.as_slice());
    }

    #[test]
    fn test_truncate_to_requires_depth() {
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Pics")]);
        let before = session.clone();

        session.truncate_to(0);
        assert_eq!(session, before);
    }

    #[test]
    fn test_close_to_root_is_synchronous_prefix() {
        let mut session = three_levels();
        session.close_to_root();

        assert_eq!(session.opened_folders().len(), 1);
        assert_eq!(session.opened_folders()[0].parent, root_ref());

        // The chained reopen appends the jump target as level 1.
        session.open_folder(FolderRef::new("f9", "Docs"), vec![file("d3", "Budget")]);
        assert_eq!(session.opened_folders().len(), 2);
        assert_eq!(session.opened_folders()[1].parent.id, "f9");
    }

    #[test]
    fn test_set_sort_reorders_every_held_sequence() {
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "b"), folder("f2", "a")]);
        session.open_folder(
            FolderRef::new("f1", "b"),
            vec![file("d1", "z"), file("d2", "y")],
        );
        session.set_search_results(vec![file("s1", "n"), file("s2", "m")]);

        session.set_sort(SortOption {
            key: SortKey::Name,
            direction: SortDirection::Asc,
        });

        let level0: Vec<&str> = session.opened_folders()[0]
            .children
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        let level1: Vec<&str> = session.opened_folders()[1]
            .children
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        let results: Vec<&str> = session
            .search_results()
            .unwrap()
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        assert_eq!(level0, ["a", "b"]);
        assert_eq!(level1, ["y", "z"]);
        assert_eq!(results, ["m", "n"]);
        // Stack identity and depth unchanged.
        assert_eq!(session.opened_folders().len(), 2);
    }

    #[test]
    fn test_search_supersedes_without_touching_stack() {
        let mut session = three_levels();
        let stack_before: Vec<OpenedFolder> = session.opened_folders().to_vec();

        session.set_search_results(vec![file("s1", "b"), file("s2", "a")]);
        assert!(session.is_searching());
        assert_eq!(session.search_results().unwrap().len(), 2);
        // Sorted on arrival (name-descending default).
        assert_eq!(session.search_results().unwrap()[0].name, "b");
        assert_eq!(session.opened_folders(), stack_before.as_slice());

        session.clear_search();
        assert!(!session.is_searching());
        assert_eq!(session.opened_folders(), stack_before.as_slice());
    }

    #[test]
    fn test_raced_opens_both_append() {
        // No cancellation of in-flight fetches: two navigations that both
        // resolve both apply their append, in completion order.
        let mut session = Session::new();
        session.load_root(root_ref(), vec![folder("f1", "Pics")]);
        session.open_folder(FolderRef::new("f1", "Pics"), vec![]);
        session.open_folder(FolderRef::new("f1", "Pics"), vec![]);

        assert_eq!(session.opened_folders().len(), 3);
    }
}
