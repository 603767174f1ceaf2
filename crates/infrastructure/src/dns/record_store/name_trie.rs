use super::record_set::RecordSet;
use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;

/// Exact names, keyed by label path: the FQDN's labels minus the trailing
/// empty root label, walked root-first (`host.autoco.internal.` descends
/// `internal` -> `autoco` -> `host`). Lookup cost is the label count, not
/// the table size.
///
/// Removal clears a node's record set but leaves the node in place;
/// the node count stays bounded by the set of names ever inserted.
#[derive(Default)]
pub(crate) struct NameTrie {
    root: TrieNode,
}

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    records: Option<RecordSet>,
}

fn labels_root_first(fqdn: &str) -> impl Iterator<Item = &str> {
    fqdn.strip_suffix('.').unwrap_or(fqdn).split('.').rev()
}

impl NameTrie {
    /// Walks to the node for `fqdn`, creating the path as needed, and
    /// returns its record set.
    pub fn entry(&mut self, fqdn: &str) -> &mut RecordSet {
        let mut node = &mut self.root;
        for label in labels_root_first(fqdn) {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        node.records.get_or_insert_with(RecordSet::default)
    }

    pub fn get(&self, fqdn: &str) -> Option<&RecordSet> {
        let mut node = &self.root;
        for label in labels_root_first(fqdn) {
            node = node.children.get(label)?;
        }
        node.records.as_ref()
    }

    pub fn get_mut(&mut self, fqdn: &str) -> Option<&mut RecordSet> {
        let mut node = &mut self.root;
        for label in labels_root_first(fqdn) {
            node = node.children.get_mut(label)?;
        }
        node.records.as_mut()
    }

    /// Detaches and returns the record set at `fqdn`, leaving the node.
    pub fn take(&mut self, fqdn: &str) -> Option<RecordSet> {
        let mut node = &mut self.root;
        for label in labels_root_first(fqdn) {
            node = node.children.get_mut(label)?;
        }
        node.records.take()
    }
}
