//! philologic-catalog: Supplies philosopher records and their learning modules.
//!
//! Sources:
//!   BuiltinCatalog: the fixed catalog shipped with the application
//!   RemoteCatalog : another PhiloLogic server's `/api/philosophers` endpoints

pub mod builtin;
pub mod remote;
pub mod source;

pub use builtin::BuiltinCatalog;
pub use remote::RemoteCatalog;
pub use source::{CatalogError, CatalogSource};
