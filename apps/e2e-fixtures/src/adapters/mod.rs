//! SeaORM adapters. Functions return `DbErr`; callers propagate it unchanged.

pub mod sessions_sea;
pub mod signup_passwords_sea;
pub mod users_sea;
