//! Content hashing utilities.

use crate::model::Node;
use xxhash_rust::xxh3::{xxh3_64, Xxh3};

/// Compute a content hash for arbitrary bytes
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Compute a structural hash of a node.
///
/// Mapping entries are hashed in key order, so two mappings holding the same
/// entries in a different order hash identically. Each value is prefixed by a
/// kind tag, which keeps `1`, `1.0`, and `"1"` apart.
pub fn structural_hash(node: &Node) -> u64 {
    let mut hasher = Xxh3::new();
    feed(&mut hasher, node);
    hasher.digest()
}

fn feed(hasher: &mut Xxh3, node: &Node) {
    match node {
        Node::Null => hasher.update(&[0]),
        Node::Bool(b) => hasher.update(&[1, u8::from(*b)]),
        Node::Int(i) => {
            hasher.update(&[2]);
            hasher.update(&i.to_le_bytes());
        }
        Node::UInt(u) => {
            hasher.update(&[3]);
            hasher.update(&u.to_le_bytes());
        }
        Node::Float(x) => {
            // -0.0 == 0.0, so they must hash the same
            let bits = if *x == 0.0 { 0u64 } else { x.to_bits() };
            hasher.update(&[4]);
            hasher.update(&bits.to_le_bytes());
        }
        Node::String(s) => {
            hasher.update(&[5]);
            feed_str(hasher, s);
        }
        Node::Sequence(items) => {
            hasher.update(&[6]);
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                feed(hasher, item);
            }
        }
        Node::Mapping(mapping) => {
            let mut entries: Vec<_> = mapping.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            hasher.update(&[7]);
            hasher.update(&(entries.len() as u64).to_le_bytes());
            for (key, value) in entries {
                feed_str(hasher, key);
                feed(hasher, value);
            }
        }
        Node::Tagged(tagged) => {
            hasher.update(&[8]);
            feed_str(hasher, &tagged.tag);
            feed(hasher, &tagged.value);
        }
    }
}

fn feed_str(hasher: &mut Xxh3, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}
