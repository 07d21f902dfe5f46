//! Session-token primitives shared by the guard and the login flow.

pub mod cookie;
pub mod identity;
pub mod token;
