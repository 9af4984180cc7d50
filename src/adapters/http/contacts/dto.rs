//! HTTP DTOs for contact endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Contact;

/// Query parameters for listing contacts.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactsQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<i64>,
}

/// Request to create a contact. The uuid is optional; the service
/// generates one when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub country_code: String,
    pub list_id: i64,
}

/// Request to update a contact; absent fields stay unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub list_id: Option<i64>,
}

/// Contact representation on the wire. The internal storage id is never
/// exposed; the uuid is the external key.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub country_code: String,
    pub list_id: i64,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            uuid: contact.uuid,
            first_name: contact.first_name,
            last_name: contact.last_name,
            mobile: contact.mobile,
            email: contact.email,
            country_code: contact.country_code,
            list_id: contact.list_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_all_contact_fields() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "mobile": "+4915112345678",
            "email": "ada@example.com",
            "country_code": "DEU",
            "list_id": 1
        }"#;
        let req: CreateContactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.first_name, "Ada");
        assert!(req.uuid.is_none());
        assert_eq!(req.list_id, 1);
    }

    #[test]
    fn update_request_defaults_absent_fields_to_unchanged() {
        let json = r#"{"email": "new@example.com"}"#;
        let req: UpdateContactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email.as_deref(), Some("new@example.com"));
        assert!(req.first_name.is_none());
        assert!(req.mobile.is_none());
        assert!(req.list_id.is_none());
    }

    #[test]
    fn response_uses_snake_case_wire_names_and_hides_id() {
        let response = ContactResponse::from(Contact {
            id: 9,
            uuid: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            mobile: "+4915112345678".to_string(),
            email: "ada@example.com".to_string(),
            country_code: "DEU".to_string(),
            list_id: 1,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["country_code"], "DEU");
        assert_eq!(json["list_id"], 1);
    }

    #[test]
    fn query_accepts_all_filters() {
        let q: ContactsQuery =
            serde_urlencoded::from_str("name=Ada&mobile=%2B49&email=example&page=1&pageSize=20")
                .unwrap();
        assert_eq!(q.name.as_deref(), Some("Ada"));
        assert_eq!(q.mobile.as_deref(), Some("+49"));
        assert_eq!(q.email.as_deref(), Some("example"));
        assert_eq!(q.page_size, Some(20));
    }
}
