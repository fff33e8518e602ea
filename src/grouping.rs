use std::collections::HashMap;

use crate::hasher::HashedFile;
use crate::scanner::FileEntry;

/// Files sharing one content fingerprint, in scan order.
///
/// The first member is the keeper: the copy that survives a removal run.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub hash: blake3::Hash,
    pub files: Vec<FileEntry>,
}

/// Group hashed files by digest, keeping only groups with 2+ files.
///
/// Grouping is pure digest equality; sizes are never consulted. Scan order
/// is preserved both within each group and across groups, since the first
/// member of each group becomes its keeper.
pub fn group_by_digest(hashed: Vec<HashedFile>) -> Vec<DuplicateGroup> {
    let mut members: HashMap<blake3::Hash, Vec<FileEntry>> = HashMap::new();
    let mut first_seen: Vec<blake3::Hash> = Vec::new();

    for file in hashed {
        let group = members.entry(file.hash).or_default();
        if group.is_empty() {
            first_seen.push(file.hash);
        }
        group.push(file.entry);
    }

    first_seen
        .into_iter()
        .filter_map(|hash| {
            let files = members.remove(&hash)?;
            (files.len() >= 2).then_some(DuplicateGroup { hash, files })
        })
        .collect()
}
