use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::{BloodType, Role, Sex, Urgency};

/// Emails are validated and stored without surrounding whitespace
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Registration payload. The store assigns `id` and starts `donations` at 0.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPerson {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    #[validate(length(min = 5, max = 32))]
    pub phone: String,
    #[serde(rename = "bloodGroup", alias = "bloodType")]
    pub blood_type: BloodType,
    pub sex: Sex,
    #[validate(length(min = 1, max = 120))]
    pub locality: String,
    pub role: Role,
}

/// Blood request submission. The requestor is taken from the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewRequest {
    #[validate(length(min = 1, max = 120))]
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "bloodGroup", alias = "bloodType")]
    pub blood_type: BloodType,
    #[validate(range(min = 1, max = 20))]
    pub units: u32,
    #[validate(length(min = 1, max = 160))]
    pub hospital: String,
    #[validate(length(min = 1, max = 120))]
    pub locality: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
}

/// Query string for the request listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequestsQuery {
    /// Case-insensitive substring of the request locality
    pub locality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_person() -> NewPerson {
        NewPerson {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "0987654321".to_string(),
            blood_type: BloodType::ONegative,
            sex: Sex::Female,
            locality: "Uptown".to_string(),
            role: Role::Both,
        }
    }

    #[test]
    fn test_new_person_valid() {
        assert!(new_person().validate().is_ok());
    }

    #[test]
    fn test_new_person_rejects_bad_email() {
        let mut person = new_person();
        person.email = "not-an-email".to_string();
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_padded_email_is_trimmed() {
        let login: LoginRequest =
            serde_json::from_str(r#"{"email": "  john@example.com\t"}"#).unwrap();
        assert_eq!(login.email, "john@example.com");
        assert!(login.validate().is_ok());

        let mut body = serde_json::to_value(new_person()).unwrap();
        body["email"] = " jane@example.com ".into();
        let person: NewPerson = serde_json::from_value(body).unwrap();
        assert_eq!(person.email, "jane@example.com");
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_new_request_units_range() {
        let mut req = NewRequest {
            patient_name: "Robert Paulson".to_string(),
            blood_type: BloodType::APositive,
            units: 2,
            hospital: "City General Hospital".to_string(),
            locality: "Downtown".to_string(),
            urgency: Urgency::High,
        };
        assert!(req.validate().is_ok());

        req.units = 0;
        assert!(req.validate().is_err());
    }
}
