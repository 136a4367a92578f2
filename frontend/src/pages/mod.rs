pub mod unified_users;

pub use unified_users::UnifiedUsersPage;
