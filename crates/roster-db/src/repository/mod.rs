//! Repository layer: query functions organized by table.

pub mod logins;
pub mod users;
