pub mod error;
pub mod locale;
pub mod responses;
pub mod security;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod resource {
    pub mod dto;
    pub mod routes;
}
pub mod user {
    pub mod dto;
    pub mod routes;
}
