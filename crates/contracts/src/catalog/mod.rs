pub mod product;
pub mod query;
pub mod status;

pub use product::{Product, ProductPage};
pub use query::CatalogQuery;
pub use status::VeganStatus;
