//! Shared items related to user account control

mod responses;
mod role;

pub use responses::LoginResponse;
pub use role::{RoleId, RoleRequirement};
