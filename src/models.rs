use serde::{Deserialize, Serialize};

use crate::validation::ValidRegistration;

/// An accepted registration as kept in the user list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    #[serde(flatten)]
    pub registration: ValidRegistration,
    pub created_at: String,
}

impl RegisteredUser {
    pub fn new(registration: ValidRegistration) -> Self {
        RegisteredUser {
            id: uuid::Uuid::new_v4().to_string(),
            registration,
            created_at: crate::utils::current_timestamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "Resources")]
    pub resources: Vec<RegisteredUser>,
}

impl UserListResponse {
    pub fn new(resources: Vec<RegisteredUser>) -> Self {
        UserListResponse {
            total_results: resources.len(),
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn registration() -> ValidRegistration {
        ValidRegistration {
            first_name: "Kany".to_string(),
            last_name: "Chheng".to_string(),
            email: "kany.chheng@gmail.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1998, 3, 22).unwrap(),
            age: 27,
            city: "Paris".to_string(),
            postal_code: "75015".to_string(),
        }
    }

    #[test]
    fn test_registered_user_json_is_flat() {
        let user = RegisteredUser::new(registration());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["firstName"], "Kany");
        assert_eq!(value["birthDate"], "1998-03-22");
        assert_eq!(value["postalCode"], "75015");
        assert_eq!(value["age"], 27);
        assert!(value["id"].as_str().is_some());
        assert!(value.get("registration").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = RegisteredUser::new(registration());
        let b = RegisteredUser::new(registration());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_response() {
        let list = UserListResponse::new(vec![RegisteredUser::new(registration())]);
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["totalResults"], json!(1));
        assert_eq!(value["Resources"].as_array().unwrap().len(), 1);
    }
}
