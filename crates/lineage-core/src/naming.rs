//! Display-name deduplication.
//!
//! Sibling sprites frequently arrive with identical display names (copies
//! of copies keep their ancestor's name). Labels in the tree must be
//! unique, so duplicates are rewritten by incrementing a trailing digit
//! and, once a digit run is exhausted, growing the name with a fresh
//! suffix.

use std::collections::HashSet;

use crate::descriptor::SpriteDescriptor;

/// Derive a name not contained in `taken`.
///
/// If `name` is free it is returned unchanged. Otherwise the candidate is
/// rewritten in rounds: a trailing digit in `'0'..='8'` is replaced by a
/// run counter cycling 1 through 9; after ten attempts in a run, or when
/// the last character cannot be incremented, the candidate grows instead
/// (`"0"` after a digit, `" 1"` after anything else) and the run restarts.
///
/// The caller is responsible for inserting the returned name into `taken`
/// before deduplicating the next item; [`assign_unique_names`] does this
/// for a whole batch.
pub fn find_unique_name(name: &str, taken: &HashSet<String>) -> String {
    let mut candidate = name.to_owned();
    let mut run = 1u8;

    while taken.contains(&candidate) {
        match candidate.chars().last() {
            Some(last) if ('0'..='8').contains(&last) && run < 10 => {
                candidate.pop();
                candidate.push((b'0' + run) as char);
                run += 1;
            }
            last => {
                let suffix = if matches!(last, Some(c) if c.is_ascii_digit()) {
                    "0"
                } else {
                    " 1"
                };
                candidate.push_str(suffix);
                run = 1;
            }
        }
    }

    candidate
}

/// Rewrite duplicate display names in place across a full batch.
///
/// Names are processed in input order; the first occurrence of a name
/// keeps it, later occurrences are rewritten. Afterwards all names are
/// pairwise distinct.
pub fn assign_unique_names(descriptors: &mut [SpriteDescriptor]) {
    let mut taken = HashSet::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let unique = find_unique_name(&descriptor.name, &taken);
        descriptor.name.clone_from(&unique);
        taken.insert(unique);
    }
}
