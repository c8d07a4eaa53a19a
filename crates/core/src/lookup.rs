//! Identifier lookup maps.
//!
//! Table views resolve foreign keys (a physician's employee id on an
//! appointment row, a department head id) to display names against
//! collections they have already fetched. Doing that with a linear search
//! per row costs O(rows × collection); building a map once per fetched
//! collection makes each resolution O(1).

use std::collections::HashMap;
use std::hash::Hash;

/// Build a lookup map over a fetched collection, keyed by an extracted
/// identifier.
///
/// Later duplicates win, which matches "last fetched row" semantics if the
/// backend ever returns a duplicate identifier.
pub fn index_by<K, T, F>(items: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.insert(key(item), item);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physician::{Physician, Position};

    fn physician(id: u64, name: &str) -> Physician {
        Physician {
            employee_id: id,
            name: name.to_owned(),
            position: Position::Attending,
            ssn: 900_000_000 + id,
        }
    }

    #[test]
    fn test_index_by_resolves_ids_to_rows() {
        let physicians = vec![physician(101, "Dr. Alvarez"), physician(102, "Dr. Chen")];
        let by_id = index_by(&physicians, |p| p.employee_id);

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id[&101].name, "Dr. Alvarez");
        assert_eq!(by_id[&102].name, "Dr. Chen");
        assert!(!by_id.contains_key(&999));
    }

    #[test]
    fn test_index_by_later_duplicate_wins() {
        let physicians = vec![physician(101, "Dr. Old"), physician(101, "Dr. New")];
        let by_id = index_by(&physicians, |p| p.employee_id);

        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[&101].name, "Dr. New");
    }
}
