//! Duplicate resolution within one scope (an object's properties or an enum's
//! keys).
//!
//! Other stages prepend, append or rewrite names, so two different raw keys
//! can end up with the same constrained name. The resolvers below prefix the
//! candidate with [`RESERVED_PREFIX`] until its *formatted* form collides with
//! neither the raw model nor the keys already committed to the constrained
//! model. The formatter is reapplied on every round since prefixing can change
//! the formatted shape.
use tracing::debug;

use super::RESERVED_PREFIX;
use crate::constrained::{ConstrainedEnumModel, ConstrainedObjectModel};
use crate::model::{EnumModel, ObjectModel};

/// Every round strictly lengthens the candidate and the names to avoid are a
/// fixed finite set, so this is only reachable with a formatter that throws
/// the prefix away.
pub const MAX_DUPLICATE_DEPTH: usize = 1024;

/// Returns `property_name` unchanged or prefixed; never the formatted form.
pub fn no_duplicate_properties(
    constrained_object_model: &ConstrainedObjectModel,
    object_model: &ObjectModel,
    property_name: &str,
    naming_formatter: &dyn Fn(&str) -> String,
) -> String {
    resolve(
        property_name,
        naming_formatter,
        object_model.properties.keys().map(String::as_str),
        |formatted| constrained_object_model.contains_key(formatted),
    )
}

/// Same as [`no_duplicate_properties`], scanning `values[].key` instead.
pub fn no_duplicate_enum_keys(
    constrained_enum_model: &ConstrainedEnumModel,
    enum_model: &EnumModel,
    enum_key: &str,
    naming_formatter: &dyn Fn(&str) -> String,
) -> String {
    resolve(
        enum_key,
        naming_formatter,
        enum_model.values.iter().map(|v| v.key.as_str()),
        |formatted| constrained_enum_model.contains_key(formatted),
    )
}

/// A raw key literally equal to the candidate is skipped: a name cannot
/// collide with the unprocessed version of itself, and that raw key is checked
/// against the constrained model when its own turn comes.
fn resolve<'r, K, C>(
    candidate: &str,
    naming_formatter: &dyn Fn(&str) -> String,
    raw_keys: K,
    committed: C,
) -> String
where
    K: Iterator<Item = &'r str> + Clone,
    C: Fn(&str) -> bool,
{
    let mut candidate = candidate.to_owned();
    for _ in 0..MAX_DUPLICATE_DEPTH {
        let formatted = naming_formatter(&candidate);
        let part_of_raw_model = raw_keys
            .clone()
            .any(|key| key != candidate && key == formatted);
        let part_of_constrained_model = committed(&formatted);
        if !part_of_raw_model && !part_of_constrained_model {
            return candidate;
        }
        debug!(
            candidate = %candidate,
            formatted = %formatted,
            part_of_raw_model,
            part_of_constrained_model,
            "duplicate key, prefixing"
        );
        candidate = format!("{RESERVED_PREFIX}{candidate}");
    }
    panic!(
        "duplicate resolution for {candidate:?} did not settle after {MAX_DUPLICATE_DEPTH} \
         rounds; the naming formatter must keep the `{RESERVED_PREFIX}` prefix"
    );
}
