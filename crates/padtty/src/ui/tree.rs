use crate::domain::entry::Entry;
use crate::ui::icon::FileIcon;

/// One renderable workspace tree row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    /// Icon selected from the entry kind and extension.
    pub icon: FileIcon,
    /// Display label, which is the entry path.
    pub label: String,
}

/// Projects an ordered entry list into renderable rows.
///
/// Pure and stateless: ordering comes from the store's `list()`, and the
/// caller re-invokes this after every store mutation.
pub fn rows(entries: &[&Entry]) -> Vec<TreeRow> {
    entries
        .iter()
        .map(|entry| TreeRow {
            icon: FileIcon::for_entry(entry.kind, &entry.path),
            label: entry.path.clone(),
        })
        .collect()
}
