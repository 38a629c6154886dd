use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when text does not name one of the eight ABO/Rh blood types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blood type: {0:?}")]
pub struct UnknownBloodType(pub String);

/// Raised when text does not name a variant of one of the small domain enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// ABO/Rh blood type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-", alias = "A−")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-", alias = "B−")]
    BNegative,
    #[serde(rename = "AB+")]
    ABPositive,
    #[serde(rename = "AB-", alias = "AB−")]
    ABNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-", alias = "O−")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::ABPositive,
        BloodType::ABNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::ABPositive => "AB+",
            BloodType::ABNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }

    /// Position in [`BloodType::ALL`]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same forms as the serde renames: canonical text or a Unicode minus
        let normalized = s.replace('−', "-");
        BloodType::ALL
            .into_iter()
            .find(|bt| bt.as_str() == normalized)
            .ok_or_else(|| UnknownBloodType(s.to_string()))
    }
}

/// Role a person holds on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Requestor,
    Volunteer,
    Both,
}

impl Role {
    /// Only volunteers can be offered as donors
    #[inline]
    pub fn can_donate(&self) -> bool {
        matches!(self, Role::Volunteer | Role::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Requestor => "Requestor",
            Role::Volunteer => "Volunteer",
            Role::Both => "Both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

/// Lifecycle of a blood request. Open -> Closed only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Open,
    Closed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "Open",
            RequestStatus::Closed => "Closed",
        }
    }
}

macro_rules! parse_variant {
    ($ty:ty, $kind:literal, [$($variant:path),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

parse_variant!(Role, "role", [Role::Requestor, Role::Volunteer, Role::Both]);
parse_variant!(Sex, "sex", [Sex::Male, Sex::Female, Sex::Other]);
parse_variant!(Urgency, "urgency", [Urgency::Low, Urgency::Medium, Urgency::High]);
parse_variant!(RequestStatus, "request status", [RequestStatus::Open, RequestStatus::Closed]);

/// Registered user: requestor, volunteer donor, or both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "bloodGroup", alias = "bloodType")]
    pub blood_type: BloodType,
    pub sex: Sex,
    pub locality: String,
    pub role: Role,
    #[serde(default)]
    pub donations: u32,
}

impl Person {
    /// Identity key used for duplicate-registration checks and login
    pub fn email_key(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Emails compare trimmed and case-insensitively
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A posted need for blood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: String,
    #[serde(rename = "requestorId")]
    pub requestor_id: String,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "bloodGroup", alias = "bloodType")]
    pub blood_type: BloodType,
    pub units: u32,
    pub hospital: String,
    pub locality: String,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl BloodRequest {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == RequestStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_parse() {
        assert_eq!("AB-".parse::<BloodType>().unwrap(), BloodType::ABNegative);
        assert_eq!("O−".parse::<BloodType>().unwrap(), BloodType::ONegative);
        assert!("o+".parse::<BloodType>().is_err());
        assert!("ab+".parse::<BloodType>().is_err());
        assert!(" O+ ".parse::<BloodType>().is_err());
        assert!("C+".parse::<BloodType>().is_err());
        assert!("".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_blood_type_display_roundtrip() {
        for bt in BloodType::ALL {
            assert_eq!(bt.to_string().parse::<BloodType>().unwrap(), bt);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, bt) in BloodType::ALL.iter().enumerate() {
            assert_eq!(bt.index(), i);
        }
    }

    #[test]
    fn test_blood_type_serde() {
        let json = serde_json::to_string(&BloodType::ABPositive).unwrap();
        assert_eq!(json, "\"AB+\"");
        let parsed: BloodType = serde_json::from_str("\"B−\"").unwrap();
        assert_eq!(parsed, BloodType::BNegative);
        assert!(serde_json::from_str::<BloodType>("\"Z+\"").is_err());
    }

    #[test]
    fn test_from_str_agrees_with_serde() {
        for text in ["A+", "AB-", "AB−", "O−", "ab+", "o-", " B+", "B+ ", "A"] {
            let parsed = text.parse::<BloodType>().ok();
            let deserialized = serde_json::from_value::<BloodType>(serde_json::Value::from(text)).ok();
            assert_eq!(parsed, deserialized, "{:?}", text);
        }
    }

    #[test]
    fn test_role_can_donate() {
        assert!(!Role::Requestor.can_donate());
        assert!(Role::Volunteer.can_donate());
        assert!(Role::Both.can_donate());
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Both".parse::<Role>().unwrap(), Role::Both);
        assert_eq!("Closed".parse::<RequestStatus>().unwrap(), RequestStatus::Closed);
        let err = "Urgent".parse::<Urgency>().unwrap_err();
        assert_eq!(err.kind, "urgency");
    }

    #[test]
    fn test_person_wire_names() {
        let json = r#"{
            "id": "u1", "name": "John Doe", "email": "John@Example.com",
            "phone": "1234567890", "bloodType": "A+", "sex": "Male",
            "locality": "Downtown", "role": "Volunteer"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.blood_type, BloodType::APositive);
        assert_eq!(person.donations, 0);
        assert_eq!(person.email_key(), "john@example.com");

        let out = serde_json::to_value(&person).unwrap();
        assert_eq!(out["bloodGroup"], "A+");
    }
}
