use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

fn default_active() -> bool {
    true
}

/// Family member record from the login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub family_id: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, with = "crate::photos::model::lenient_datetime")]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::photos::model::lenient_datetime")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Live login session: the signed-in member plus their bearer token.
///
/// Created at login success and passed explicitly to whatever renders the
/// views; nothing is process-global. `end` consumes the session at
/// logout, so a logged-out session cannot be reused.
#[derive(Debug, Clone)]
pub struct Session {
    user: UserProfile,
    token: String,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn begin(user: UserProfile, token: String) -> Self {
        tracing::info!("session started for {}", user.email);
        Self {
            user,
            token,
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn family_id(&self) -> &str {
        &self.user.family_id
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn end(self) {
        tracing::info!("session ended for {}", self.user.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(role: Role) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            role,
            family_id: "fam1".to_string(),
            avatar_url: None,
            active: true,
            registered_at: None,
            last_seen_at: None,
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"member\"").unwrap(),
            Role::Member
        );
    }

    #[test]
    fn test_user_profile_from_login_response() {
        let json = r#"{
            "id": "u1",
            "email": "ana@example.com",
            "first_name": "Ana",
            "last_name": "García",
            "role": "member",
            "family_id": "fam1",
            "registered_at": "2024-01-10T09:00:00+00:00"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.active, "active defaults to true");
        assert!(user.avatar_url.is_none());
        assert!(user.registered_at.is_some());
        assert_eq!(user.display_name(), "Ana García");
    }

    #[test]
    fn test_session_lifecycle() {
        let session = Session::begin(make_user(Role::Member), "jwt-token".to_string());
        assert_eq!(session.family_id(), "fam1");
        assert_eq!(session.bearer_token(), "jwt-token");
        assert!(!session.is_admin());
        session.end();
    }

    #[test]
    fn test_admin_session() {
        let session = Session::begin(make_user(Role::Admin), "jwt-token".to_string());
        assert!(session.is_admin());
        session.end();
    }
}
