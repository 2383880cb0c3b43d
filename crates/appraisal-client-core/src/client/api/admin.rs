pub mod contact_requests;
pub mod users;
