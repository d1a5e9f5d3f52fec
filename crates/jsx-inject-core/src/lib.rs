//! The jsx-inject wrap engine.
//!
//! Given a wrapper component declaration and a batch of target files,
//! this crate locates JSX-returning exported components and rewrites
//! their returned JSX so a designated element becomes enclosed by the
//! wrapper, inserting the wrapper's import where missing.
//!
//! The run pipeline, in order:
//!
//! 1. [`resolve_descriptor`] — derive the wrapper's importable identity
//!    (default vs named, binding name)
//! 2. [`locate_components`] — find exported declarations whose declared
//!    return type is a JSX element type, and their returned JSX roots
//! 3. [`plan_wraps`] — decide the edits under root or named-target
//!    policy, with idempotency checks
//! 4. [`apply_plan`] — inject imports first, then replace spans in
//!    discovery order, skipping spans forgotten by earlier edits
//! 5. [`format_and_persist`] — reformat and write back changed files
//!
//! [`run`] ties the five together for one invocation.

mod apply;
mod descriptor;
mod engine;
mod error;
mod locate;
mod pipeline;
mod run;
mod type_query;

pub use apply::{ApplyOutcome, apply_plan};
pub use descriptor::{ImportDescriptor, resolve_descriptor};
pub use engine::{PendingEdit, WrapPlan, plan_wraps};
pub use error::WrapError;
pub use locate::{LocatedReturn, TargetFile, load_targets, locate_components};
pub use pipeline::{
    FormatError, FormatOptions, Formatter, PersistOutcome, QuoteStyle, TsxFormatter,
    format_and_persist,
};
pub use run::{WrapReport, WrapRequest, run, run_with};
pub use type_query::{AnnotationTypeQuery, TypeQuery, TypeQueryError};
