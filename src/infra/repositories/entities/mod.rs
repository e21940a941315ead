//! SeaORM entity definitions
//!
//! Database-specific entities, one module per table, separate from the
//! domain models they convert into.

pub mod menu;
pub mod request_log;
pub mod role;
pub mod user;
pub mod user_role;
