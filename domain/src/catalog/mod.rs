//! Type catalog: the static description table keyed by type code.

mod profile;

pub use profile::{DEFAULT_CODE, TypeCatalog, TypeProfile};
