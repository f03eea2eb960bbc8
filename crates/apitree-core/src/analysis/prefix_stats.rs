//! Frequency of underscore-delimited name prefixes of each operation's last
//! path segment, partitioned by tag.
//!
//! For `/orders/create_order_item` at `max_depth = 2`, the pieces are
//! `create`, `order`, `item` and the counted prefixes are `create` (depth 1)
//! and `create_order` (depth 2).

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::parse::ApiDocument;

/// Number of prefixes shown per tag and depth in the console report.
pub const DEFAULT_TOP: usize = 5;

type DepthCounts = BTreeMap<usize, IndexMap<String, u64>>;

/// Tag → depth → prefix → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixStats {
    max_depth: usize,
    counts: IndexMap<String, DepthCounts>,
}

/// Underscore pieces of the last `/`-delimited segment, empty pieces dropped.
fn name_pieces(path: &str) -> Vec<&str> {
    path.rsplit('/')
        .next()
        .unwrap_or_default()
        .split('_')
        .filter(|p| !p.is_empty())
        .collect()
}

impl PrefixStats {
    /// Count prefixes at depths `1..=max_depth` for every tagged operation.
    /// A tag listed twice on one operation still counts once.
    pub fn compute(doc: &ApiDocument, max_depth: usize) -> Self {
        let mut stats = PrefixStats {
            max_depth,
            counts: IndexMap::new(),
        };

        for op in doc.operations() {
            let tags: IndexSet<&str> = op.tags().into_iter().collect();
            if tags.is_empty() {
                continue;
            }
            let pieces = name_pieces(op.path);
            let depth_limit = max_depth.min(pieces.len());
            if depth_limit == 0 {
                continue;
            }

            for tag in tags {
                let by_depth = stats.counts.entry(tag.to_string()).or_default();
                for depth in 1..=depth_limit {
                    let prefix = pieces[..depth].join("_");
                    *by_depth.entry(depth).or_default().entry(prefix).or_insert(0) += 1;
                }
            }
        }

        stats
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tags with at least one counted prefix, in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Depths recorded for `tag`, ascending.
    pub fn depths(&self, tag: &str) -> Vec<usize> {
        self.counts
            .get(tag)
            .map(|d| d.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Prefix counts for `tag` at `depth`, in first-seen order.
    pub fn counts(&self, tag: &str, depth: usize) -> Option<&IndexMap<String, u64>> {
        self.counts.get(tag)?.get(&depth)
    }

    /// The `n` most frequent prefixes, count descending; ties keep first-seen order.
    pub fn top(&self, tag: &str, depth: usize, n: usize) -> Vec<(&str, u64)> {
        let Some(counts) = self.counts(tag, depth) else {
            return Vec::new();
        };
        let mut ranked: Vec<(&str, u64)> = counts.iter().map(|(p, c)| (p.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Serializes as `{tag: {"depth": {prefix: count}}}` with depth keys as strings.
impl Serialize for PrefixStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tags = serializer.serialize_map(Some(self.counts.len()))?;
        for (tag, by_depth) in &self.counts {
            let by_depth: IndexMap<String, &IndexMap<String, u64>> = by_depth
                .iter()
                .map(|(depth, prefixes)| (depth.to_string(), prefixes))
                .collect();
            tags.serialize_entry(tag, &by_depth)?;
        }
        tags.end()
    }
}
