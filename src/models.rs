//! Frontend Models
//!
//! Data structures matching the REST API.

use serde::{Deserialize, Serialize};

pub use todo_sync::{Priority, Todo, TodoPatch};

/// Signed-in user (matches `/me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial profile update sent to `PUT /me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UserUpdate {
    pub fn full_name(full_name: impl Into<String>) -> Self {
        Self { full_name: Some(full_name.into()), ..Default::default() }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), ..Default::default() }
    }

    pub fn password(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            old_password: Some(old_password.into()),
            new_password: Some(new_password.into()),
            ..Default::default()
        }
    }

    /// Merge the visible fields into the signed-in user; passwords are not kept
    pub fn apply_to(&self, user: &mut User) {
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_me_payload() {
        let json = r#"{"_id":"u1","fullName":"Ada Lovelace","email":"ada@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "Ada Lovelace");
        assert_eq!(user.image_url, None);
    }

    #[test]
    fn test_password_update_payload() {
        let json = serde_json::to_string(&UserUpdate::password("Old12345", "New12345")).unwrap();
        assert_eq!(json, r#"{"oldPassword":"Old12345","newPassword":"New12345"}"#);
    }

    #[test]
    fn test_update_merges_into_user() {
        let mut user = User {
            id: "u1".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            image_url: None,
        };
        UserUpdate::full_name("Ada King").apply_to(&mut user);
        assert_eq!(user.full_name, "Ada King");
        assert_eq!(user.email, "ada@example.com");

        UserUpdate::password("a", "b").apply_to(&mut user);
        assert_eq!(user.full_name, "Ada King");
    }
}
