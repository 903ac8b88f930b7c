//! Canonical signatures for O(1)-style community equality.
//!
//! A signature is the community's de-duplicated member set sorted ascending
//! and joined with [`SIGNATURE_DELIMITER`]. Signature equality is therefore
//! equivalent to set equality, independent of the order or duplication of the
//! original input. Identifiers that themselves contain the delimiter are the
//! caller's responsibility; the signature layer does not escape them.

use crate::community::Community;

/// Separator between members in a canonical signature. Must not appear
/// inside member identifiers.
pub const SIGNATURE_DELIMITER: &str = "|";

/// Canonical signature of a community's member set.
///
/// The empty community yields the empty string.
pub fn signature(community: &Community) -> String {
    // BTreeSet iterates in ascending order, so the sort is already done.
    let members: Vec<&str> = community.members.iter().map(String::as_str).collect();
    members.join(SIGNATURE_DELIMITER)
}
