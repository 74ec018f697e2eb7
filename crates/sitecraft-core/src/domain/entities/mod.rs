pub mod layout;
pub mod options;

pub use crate::domain::DomainError;
pub use layout::AssetSources;
pub use options::{ScaffoldOptions, ScaffoldOptionsBuilder};
