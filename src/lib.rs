//! Identifier constraint engine.
//!
//! Takes language-agnostic object and enum models and derives constrained
//! models whose every name is a valid, non-empty, non-keyword, collision-free
//! identifier for one target language, ready to be printed verbatim by an
//! emitter.
//!
//! ```text
//! model        raw models from the schema parser
//!   ↓
//! lower        walks keys in order, threads the constrained model through
//!   ↓
//! constrainer  per-kind pipelines with overridable stages
//!   ↓
//! constraints  primitives + duplicate resolvers
//!   ↓
//! format_helpers
//! ```
pub mod constrained;
pub mod constrainer;
pub mod constraints;
pub mod error;
pub mod format_helpers;
pub mod java;
pub mod lower;
pub mod model;
pub mod path_de;

pub use constrained::{ConstrainedEnumModel, ConstrainedModel, ConstrainedObjectModel};
pub use constrainer::{
    ConstrainerSet, EnumKeyConstrainer, EnumValueConstrainer, ModelNameConstrainer,
    PropertyKeyConstrainer,
};
pub use error::Error;
pub use format_helpers::NamingConvention;
pub use lower::{lower_all, lower_enum, lower_model, lower_object};
pub use model::{EnumModel, ObjectModel, PropertyModel, RawModel};
