pub mod attributes;
pub mod conversion;
pub mod record;

pub use attributes::*;
pub use conversion::*;
pub use record::*;
