pub mod db;
pub mod memory;
pub mod resource {
    pub mod entity;
    pub mod store;
}
pub mod user {
    pub mod entity;
    pub mod store;
}
