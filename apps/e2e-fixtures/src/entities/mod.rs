pub mod passwords;
pub mod sessions;
pub mod signup_passwords;
pub mod users;

pub use passwords::Entity as Passwords;
pub use passwords::Model as Password;
pub use sessions::Entity as Sessions;
pub use sessions::Model as Session;
pub use signup_passwords::Entity as SignupPasswords;
pub use signup_passwords::Model as SignupPassword;
pub use users::Entity as Users;
pub use users::Model as User;
