pub mod cleanup;
pub mod generator;
pub mod login;
pub mod sessions;
pub mod signup;
pub mod users;

pub use cleanup::CleanupRegistry;
pub use generator::{UserData, UserDataGenerator};
pub use login::LoginOptions;
pub use sessions::{mint_session, session_cookie_value, SESSION_TTL};
pub use signup::SIGNUP_PASSWORD_PHRASE;
pub use users::{InsertUserOptions, SyntheticUser};
