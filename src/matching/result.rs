use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use super::MatchMode;

/// Index lists published for one key of an [`ArgsMatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArgMatchGroup<'a> {
    /// Indices where the key itself occurs
    #[cfg_attr(feature = "serde", serde(rename = "argsequal"))]
    pub args_equal: &'a [usize],
    /// Indices whose element maps onto the key, if any were linked
    #[cfg_attr(feature = "serde", serde(rename = "argsmatch"))]
    pub args_match: Option<&'a [usize]>,
}

#[derive(Debug, Clone)]
struct MatchEntry<K> {
    key: K,
    args_equal: Vec<usize>,
    /// Slot whose `args_equal` doubles as this key's match list
    linked: Option<usize>,
    published: bool,
}

/// Result of [`args_match`](super::args_match)
///
/// Published keys iterate in order of first publication.
#[derive(Debug, Clone)]
pub struct ArgsMatch<K> {
    mode: MatchMode,
    entries: Vec<MatchEntry<K>>,
    slots: HashMap<K, usize>,
    published: Vec<usize>,
}

impl<K: Hash + Eq + Clone> ArgsMatch<K> {
    pub(super) fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            slots: HashMap::new(),
            published: Vec::new(),
        }
    }

    /// Consume `item` found at `index`, whose image under the mapper is `mapped`
    pub(super) fn record(&mut self, item: K, mapped: K, index: usize) {
        let (slot, is_new) = match self.slots.get(&item) {
            Some(&slot) => {
                self.entries[slot].args_equal.push(index);
                (slot, false)
            }
            None => {
                let slot = self.entries.len();
                let publish = self.mode == MatchMode::All;
                self.slots.insert(item.clone(), slot);
                self.entries.push(MatchEntry {
                    key: item,
                    args_equal: vec![index],
                    linked: None,
                    published: publish,
                });
                if publish {
                    self.published.push(slot);
                }
                (slot, true)
            }
        };

        let Some(&target) = self.slots.get(&mapped) else {
            return;
        };
        self.entries[target].linked = Some(slot);
        trace!(index, target, source = slot, "linked match");

        if is_new && !self.entries[target].published {
            self.entries[target].published = true;
            self.published.push(target);
        }
    }

    /// Index lists for `key`, if it was published
    pub fn get<Q>(&self, key: &Q) -> Option<ArgMatchGroup<'_>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &slot = self.slots.get(key)?;
        self.entries[slot].published.then(|| self.group(slot))
    }

    /// Whether `key` was published
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(key)
            .is_some_and(|&slot| self.entries[slot].published)
    }
}

impl<K> ArgsMatch<K> {
    fn group(&self, slot: usize) -> ArgMatchGroup<'_> {
        let entry = &self.entries[slot];
        ArgMatchGroup {
            args_equal: &entry.args_equal,
            args_match: entry
                .linked
                .map(|source| self.entries[source].args_equal.as_slice()),
        }
    }

    /// Mode the result was built with
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of published keys
    pub fn len(&self) -> usize {
        self.published.len()
    }

    /// Whether nothing was published
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }

    /// Published keys with their index lists
    pub fn iter(&self) -> impl Iterator<Item = (&K, ArgMatchGroup<'_>)> + '_ {
        self.published
            .iter()
            .map(|&slot| (&self.entries[slot].key, self.group(slot)))
    }

    /// Published keys
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.published.iter().map(|&slot| &self.entries[slot].key)
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for ArgsMatch<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, group) in self.iter() {
            map.serialize_entry(key, &group)?;
        }
        map.end()
    }
}
