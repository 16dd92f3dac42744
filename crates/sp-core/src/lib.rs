pub mod config;
pub mod error;
pub mod fragment;

pub use config::{BundleConfig, HarnessConfig, SrcpackConfig};
pub use error::{Result, SpError};
pub use fragment::{header_rank, FragmentRole, SourceFragment, OTHER_HEADER_RANK};
