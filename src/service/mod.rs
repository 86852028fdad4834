pub mod catalog;
pub mod login;
pub mod password;

pub use catalog::CatalogService;
pub use login::LoginService;
