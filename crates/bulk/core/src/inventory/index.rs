//! Grouping of flat records by the container they reference.

use std::collections::HashMap;

use super::record::ItemRecord;

/// Records grouped by container, addressed by position in the record slice.
///
/// When ids repeat, references resolve to the first record with that id.
pub(crate) struct ContainerIndex<'a> {
    records: &'a [ItemRecord],
    by_id: HashMap<&'a str, usize>,
    held: HashMap<usize, Vec<usize>>,
    top_level: Vec<usize>,
}

impl<'a> ContainerIndex<'a> {
    pub(crate) fn new(records: &'a [ItemRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_id.entry(record.id.as_str()).or_insert(index);
        }

        let mut held: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut top_level = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let container = record
                .container_id
                .as_ref()
                .and_then(|id| by_id.get(id.as_str()).copied());
            match container {
                Some(container) => held.entry(container).or_default().push(index),
                None => top_level.push(index),
            }
        }

        Self {
            records,
            by_id,
            held,
            top_level,
        }
    }

    pub(crate) fn records(&self) -> &'a [ItemRecord] {
        self.records
    }

    pub(crate) fn record(&self, index: usize) -> &'a ItemRecord {
        &self.records[index]
    }

    pub(crate) fn top_level(&self) -> &[usize] {
        &self.top_level
    }

    pub(crate) fn held_by(&self, index: usize) -> &[usize] {
        self.held.get(&index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the record's container reference names an existing record.
    pub(crate) fn is_in_container(&self, index: usize) -> bool {
        self.records[index]
            .container_id
            .as_ref()
            .is_some_and(|id| self.by_id.contains_key(id.as_str()))
    }
}
