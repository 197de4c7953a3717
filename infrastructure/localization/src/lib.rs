pub mod embedded;
pub mod store;

pub use embedded::EmbeddedResourceProvider;
pub use store::StoreResourceProvider;
