pub mod application {
    pub mod existence;
    pub(crate) mod pipeline;
    pub mod repository;
}

pub mod domain {
    pub mod entity;
    pub mod errors;
    pub mod log_service;
    pub mod logger;
    pub mod repository;
    pub mod store;
    pub mod token;
    pub mod validation;
    pub mod localization {
        pub mod catalog;
        pub mod errors;
        pub mod handler;
        pub mod keys;
        pub mod locale;
        pub mod provider;
    }
    pub mod operation {
        pub mod error_type;
        pub mod result;
        pub mod strategy;
    }
    pub mod resource {
        pub mod model;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod model;
        pub mod password;
    }
}
