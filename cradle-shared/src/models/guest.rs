use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::Masked;

/// A registered attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    /// Phone as the guest typed it.
    pub phone: Masked<String>,
    /// Normalized phone, unique across guests. Used for login lookups.
    #[serde(skip)]
    pub phone_key: String,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub stay_connected: bool,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(registration: NewGuest, phone_key: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: registration.name.trim().to_string(),
            phone: Masked(registration.phone),
            phone_key,
            companions: registration.companions,
            stay_connected: registration.stay_connected,
            created_at: Utc::now(),
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGuest {
    pub name: String,
    #[serde(alias = "whatsapp")]
    pub phone: String,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub stay_connected: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestLogin {
    pub name: String,
    #[serde(alias = "whatsapp")]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_accepts_whatsapp_alias() {
        let payload = r#"{"name": " Ana ", "whatsapp": "(11) 99999-8888", "companions": ["Bia"]}"#;
        let registration: NewGuest = serde_json::from_str(payload).unwrap();
        assert_eq!(registration.phone, "(11) 99999-8888");
        assert!(!registration.stay_connected);

        let guest = Guest::new(registration, "11999998888".into());
        assert_eq!(guest.name, "Ana");
        assert_eq!(guest.companions, vec!["Bia"]);

        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["phone"], "(11) 99999-8888");
        assert!(json.get("phone_key").is_none());
    }
}
