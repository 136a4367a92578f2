pub mod actions;
pub mod filters;
pub mod record_pager;
pub mod table;
