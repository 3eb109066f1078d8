//! Registration Entity
//!
//! Persistence-ready record produced by
//! [`RegistrationBuilder`](crate::application::builder::RegistrationBuilder).

use kernel::id::RegistrationId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    registration_token::RegistrationToken, user_password::UserPassword,
};

/// Registration record
///
/// Username and email are opaque here; the host service validates them.
/// `id` stays `None` until the store assigns one. The document shape is
/// `{ "_id"?, "username", "password", "email", "token" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<RegistrationId>,
    username: String,
    password: UserPassword,
    email: String,
    token: RegistrationToken,
}

impl RegistrationRecord {
    pub(crate) fn new(
        username: String,
        password: UserPassword,
        email: String,
        token: RegistrationToken,
    ) -> Self {
        Self {
            id: None,
            username,
            password,
            email,
            token,
        }
    }

    /// Attach the identifier a store assigned on insert
    pub fn with_id(self, id: RegistrationId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<&RegistrationId> {
        self.id.as_ref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &UserPassword {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &RegistrationToken {
        &self.token
    }
}
