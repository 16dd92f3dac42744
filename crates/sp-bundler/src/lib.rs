//! srcpack bundler — source amalgamation and shrinking pipeline.
//!
//! Stages, in order:
//! 1. Collect — discover and order headers/translation units
//! 2. Concat — merge fragments, drop project-local includes
//! 3. Comments — strip line/block comments
//! 4. Spaces — collapse space runs to fixed point
//! 5. Guard — escape preprocessor conditionals
//! 6. Rename — replace curated long identifiers with short codes
//! 7. Assemble — frame the body with preamble, license and driver

pub mod assemble;
pub mod collect;
pub mod comments;
pub mod concat;
pub mod guard;
pub mod pipeline;
pub mod rename;
pub mod spaces;

pub use pipeline::{BundlePipeline, BundleReport};
pub use rename::{RenameEntry, RenameTable};
