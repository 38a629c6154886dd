use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use crate::models::{
    normalize_email, BloodRequest, BloodType, NewPerson, NewRequest, Person, RequestStatus, Role,
    Sex, Urgency,
};
use crate::services::store::{RecordStore, StoreError};

/// In-process store backed by two vectors
///
/// Every instance is independent, so tests build a fresh one each.
#[derive(Default)]
pub struct MemoryStore {
    persons: RwLock<Vec<Person>>,
    requests: RwLock<Vec<BloodRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo catalogue
    pub fn seeded() -> Self {
        Self::with_records(demo_persons(), demo_requests())
    }

    pub fn with_records(persons: Vec<Person>, requests: Vec<BloodRequest>) -> Self {
        Self {
            persons: RwLock::new(persons),
            requests: RwLock::new(requests),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn get_request_by_id(&self, id: &str) -> Result<Option<BloodRequest>, StoreError> {
        Ok(self.requests.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list_requests(&self) -> Result<Vec<BloodRequest>, StoreError> {
        let mut requests = self.requests.read().await.clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn create_request(
        &self,
        requestor_id: &str,
        data: NewRequest,
    ) -> Result<BloodRequest, StoreError> {
        let request = BloodRequest {
            id: uuid::Uuid::new_v4().to_string(),
            requestor_id: requestor_id.to_string(),
            patient_name: data.patient_name,
            blood_type: data.blood_type,
            units: data.units,
            hospital: data.hospital,
            locality: data.locality,
            urgency: data.urgency,
            status: RequestStatus::Open,
            created_at: Utc::now(),
        };

        self.requests.write().await.push(request.clone());
        tracing::debug!("Created request {} for {}", request.id, requestor_id);
        Ok(request)
    }

    async fn close_request(&self, id: &str) -> Result<BloodRequest, StoreError> {
        let mut requests = self.requests.write().await;
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("request {}", id)))?;

        if !request.is_open() {
            return Err(StoreError::AlreadyClosed(id.to_string()));
        }
        request.status = RequestStatus::Closed;
        Ok(request.clone())
    }

    async fn list_persons(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.persons.read().await.clone())
    }

    async fn get_person_by_id(&self, id: &str) -> Result<Option<Person>, StoreError> {
        Ok(self.persons.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_person_by_email(&self, email: &str) -> Result<Option<Person>, StoreError> {
        let key = normalize_email(email);
        Ok(self
            .persons
            .read()
            .await
            .iter()
            .find(|p| p.email_key() == key)
            .cloned())
    }

    async fn register_person(&self, data: NewPerson) -> Result<Person, StoreError> {
        let key = normalize_email(&data.email);

        // Check and insert under one write guard
        let mut persons = self.persons.write().await;
        if persons.iter().any(|p| p.email_key() == key) {
            return Err(StoreError::DuplicateEmail(data.email));
        }

        let person = Person {
            id: uuid::Uuid::new_v4().to_string(),
            name: data.name,
            email: data.email.trim().to_string(),
            phone: data.phone,
            blood_type: data.blood_type,
            sex: data.sex,
            locality: data.locality,
            role: data.role,
            donations: 0,
        };
        persons.push(person.clone());
        Ok(person)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_person(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    blood_type: BloodType,
    sex: Sex,
    locality: &str,
    role: Role,
    donations: u32,
) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        blood_type,
        sex,
        locality: locality.to_string(),
        role,
        donations,
    }
}

fn demo_persons() -> Vec<Person> {
    vec![
        demo_person("u1", "John Doe", "john@example.com", "1234567890", BloodType::APositive, Sex::Male, "Downtown", Role::Volunteer, 6),
        demo_person("u2", "Jane Smith", "jane@example.com", "0987654321", BloodType::ONegative, Sex::Female, "Uptown", Role::Both, 12),
        demo_person("u3", "Sam Wilson", "sam@example.com", "1122334455", BloodType::BPositive, Sex::Male, "Downtown", Role::Volunteer, 2),
        demo_person("u4", "Emily Clark", "emily@example.com", "5566778899", BloodType::ABPositive, Sex::Female, "Midtown", Role::Requestor, 0),
    ]
}

fn demo_requests() -> Vec<BloodRequest> {
    let now = Utc::now();
    vec![
        BloodRequest {
            id: "r1".to_string(),
            requestor_id: "u4".to_string(),
            patient_name: "Robert Paulson".to_string(),
            blood_type: BloodType::APositive,
            units: 2,
            hospital: "City General Hospital".to_string(),
            locality: "Downtown".to_string(),
            urgency: Urgency::High,
            status: RequestStatus::Open,
            created_at: now,
        },
        BloodRequest {
            id: "r2".to_string(),
            requestor_id: "u2".to_string(),
            patient_name: "Maria Garcia".to_string(),
            blood_type: BloodType::ONegative,
            units: 4,
            hospital: "Uptown Medical Center".to_string(),
            locality: "Uptown".to_string(),
            urgency: Urgency::Medium,
            status: RequestStatus::Open,
            created_at: now - Duration::days(1),
        },
    ]
}
