//! Rule trait, step context and parameters for Sprawl simulations.
//!
//! The [`Rule`] trait defines the `&self` step function; [`StepContext`]
//! splits access into a frozen pre-rule snapshot (read) and the next
//! grid (write), so every rule is a synchronous update. [`RuleParams`]
//! carries the caller's named scalar parameters, validated against each
//! rule's [`ParamSpec`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod params;
pub mod rule;

pub use context::StepContext;
pub use params::{ParamError, ParamKind, ParamSpec, ParamValue, RuleParams};
pub use rule::Rule;
