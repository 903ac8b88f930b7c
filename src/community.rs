//! Community and collection types for overlap matching.
//!
//! A [`Community`] is an indexed set of member identifiers (e.g. proteins in
//! a module or complex). A [`CommunityCollection`] is an ordered sequence of
//! communities; order is preserved only for indexing and carries no matching
//! semantics. Collections are the loader contract: any storage layer that can
//! produce an ordered sequence of member-identifier sets can feed the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One community: a 1-based id plus a de-duplicated set of member identifiers.
///
/// The id is the community's ordinal position in its source collection,
/// counting from 1 to match the numbering conventionally used in partition
/// exports. Members are de-duplicated by construction; `BTreeSet` keeps them
/// sorted so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: usize,
    pub members: BTreeSet<String>,
}

impl Community {
    /// Build a community from raw member identifiers, dropping duplicates.
    pub fn new<I, S>(id: usize, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members shared with `other`.
    pub fn intersection_count(&self, other: &Community) -> usize {
        // Walk the smaller set and probe the larger one.
        let (small, large) = if self.size() <= other.size() {
            (&self.members, &other.members)
        } else {
            (&other.members, &self.members)
        };
        small.iter().filter(|m| large.contains(*m)).count()
    }

    /// Size of the union with `other`, derived without materializing it.
    pub fn union_count(&self, other: &Community) -> usize {
        self.size() + other.size() - self.intersection_count(other)
    }

    /// Whether every member of `self` is also a member of `other`.
    ///
    /// The empty community is a subset of every community, itself included.
    pub fn is_subset_of(&self, other: &Community) -> bool {
        self.members.is_subset(&other.members)
    }

    /// Shared members with `other`, sorted ascending.
    pub fn shared_members(&self, other: &Community) -> Vec<String> {
        self.members.intersection(&other.members).cloned().collect()
    }
}

/// Ordered, index-addressable sequence of communities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCollection {
    communities: Vec<Community>,
}

impl CommunityCollection {
    /// Build a collection from raw member lists, assigning ids from input
    /// order (first list becomes community 1).
    pub fn from_member_lists<I, L, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let communities = lists
            .into_iter()
            .enumerate()
            .map(|(pos, members)| Community::new(pos + 1, members))
            .collect();
        Self { communities }
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Community> {
        self.communities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Community> {
        self.communities.get(index)
    }

    /// Sizes of all communities, in collection order.
    pub fn sizes(&self) -> Vec<usize> {
        self.communities.iter().map(Community::size).collect()
    }
}

impl<'a> IntoIterator for &'a CommunityCollection {
    type Item = &'a Community;
    type IntoIter = std::slice::Iter<'a, Community>;

    fn into_iter(self) -> Self::IntoIter {
        self.communities.iter()
    }
}
