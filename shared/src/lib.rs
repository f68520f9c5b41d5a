pub mod constants;
pub mod credentials;

pub use credentials::LoginCredentials;
