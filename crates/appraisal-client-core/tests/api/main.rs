#![cfg(not(target_arch = "wasm32"))]

mod downloads;
mod helpers;
mod login;
mod requests;
mod session_invalidation;
