//! DTOs for users_sea adapter.

/// DTO for creating a user together with its password row.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    /// Display name. Defaults to the username.
    pub name: String,
    pub password_hash: String,
}

impl UserCreate {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let username = username.into();
        Self {
            name: username.clone(),
            username,
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
