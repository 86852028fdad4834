pub mod advisor_repo;
pub mod listing_repo;
pub mod pool;
pub mod user_repo;

pub use advisor_repo::AdvisorRepository;
pub use listing_repo::ListingRepository;
pub use pool::{connect, connect_options, pool_options};
pub use user_repo::UserRepository;
