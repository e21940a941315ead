//! Domain layer: the entities the rest of the crate revolves around.
//!
//! Plain data plus the small amount of behavior that belongs to it
//! (account status rules, password hashing). No infrastructure here.

pub mod menu;
pub mod password;
pub mod request_log;
pub mod role;
pub mod user;

pub use menu::Menu;
pub use password::{HashCost, Password};
pub use request_log::{NewRequestLog, RequestLog};
pub use role::{DefaultRole, Role};
pub use user::{User, UserStatus};
