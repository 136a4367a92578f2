pub mod common;
pub mod layout;
pub mod notification;
pub mod pagination;
