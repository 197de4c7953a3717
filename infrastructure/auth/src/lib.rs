pub mod jwt;

pub use jwt::JwtBearerDecoder;
