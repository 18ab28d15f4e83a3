use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use study_planner_admin::api::envelope::{Envelope, Page};
use study_planner_admin::error::ClientError;
use study_planner_admin::models::{StudentClass, StudentClassRequest};
use study_planner_admin::repositories::StudentClassRepository;
use study_planner_admin::stores::StudentClassStore;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    GetAll { class_id: String, page: u32, page_size: u32 },
    Add { class_id: String, student_id: String },
    Delete { class_id: String, student_id: String },
}

struct ScriptedRosterRepository {
    calls: Mutex<Vec<Call>>,
    mutation_succeeds: bool,
}

impl ScriptedRosterRepository {
    fn new(mutation_succeeds: bool) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            mutation_succeeds,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn mutation(&self) -> Envelope<bool> {
        if self.mutation_succeeds {
            Envelope {
                success: true,
                message: String::new(),
                data: Some(true),
            }
        } else {
            Envelope::failure("student is already enrolled")
        }
    }
}

fn roster_page(class_id: &str, student_ids: &[&str]) -> Envelope<Page<StudentClass>> {
    let items: Vec<StudentClass> = student_ids
        .iter()
        .map(|id| StudentClass {
            class_id: class_id.to_string(),
            student_id: id.to_string(),
            student_name: format!("Student {}", id),
            study_status: 1,
        })
        .collect();
    let total = items.len() as u64;
    let page: Page<StudentClass> = serde_json::from_value(serde_json::json!({
        "data": items,
        "totalItems": total,
    }))
    .expect("scripted page must decode");
    Envelope {
        success: true,
        message: String::new(),
        data: Some(page),
    }
}

#[async_trait]
impl StudentClassRepository for ScriptedRosterRepository {
    async fn add(&self, entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError> {
        self.calls.lock().unwrap().push(Call::Add {
            class_id: entry.class_id.clone(),
            student_id: entry.student_id.clone(),
        });
        Ok(self.mutation())
    }

    async fn get_all(
        &self,
        class_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<StudentClass>>, ClientError> {
        self.calls.lock().unwrap().push(Call::GetAll {
            class_id: class_id.to_string(),
            page,
            page_size,
        });
        Ok(roster_page(class_id, &["s1", "s2"]))
    }

    async fn delete(
        &self,
        class_id: &str,
        student_id: &str,
    ) -> Result<Envelope<bool>, ClientError> {
        self.calls.lock().unwrap().push(Call::Delete {
            class_id: class_id.to_string(),
            student_id: student_id.to_string(),
        });
        Ok(self.mutation())
    }

    async fn update(&self, _entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(self.mutation())
    }

    async fn search(
        &self,
        _class_id: &str,
        _text_to_search: &str,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<StudentClass>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_by_ids(
        &self,
        _class_id: &str,
        _student_id: &str,
    ) -> Result<Envelope<StudentClass>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }
}

#[tokio::test]
async fn enrolling_refetches_the_roster_of_that_class() {
    let repo = Arc::new(ScriptedRosterRepository::new(true));
    let mut store = StudentClassStore::new(repo.clone());

    let entry = StudentClassRequest {
        class_id: "c-math".to_string(),
        student_id: "s9".to_string(),
        study_status: 1,
    };
    store.add_entry(&entry).await;

    assert!(store.error_message.is_none());
    assert_eq!(
        repo.calls(),
        vec![
            Call::Add { class_id: "c-math".to_string(), student_id: "s9".to_string() },
            Call::GetAll { class_id: "c-math".to_string(), page: 1, page_size: 10 },
        ]
    );
    assert_eq!(store.entries.len(), 2);
    assert_eq!(store.total_entries, 2);
}

#[tokio::test]
async fn removal_refetches_the_class_it_was_given() {
    let repo = Arc::new(ScriptedRosterRepository::new(true));
    let mut store = StudentClassStore::new(repo.clone());

    store.delete_entry("c-art", "s1").await;

    assert_eq!(
        repo.calls(),
        vec![
            Call::Delete { class_id: "c-art".to_string(), student_id: "s1".to_string() },
            Call::GetAll { class_id: "c-art".to_string(), page: 1, page_size: 10 },
        ]
    );
}

#[tokio::test]
async fn failed_enrollment_reports_and_skips_the_refetch() {
    let repo = Arc::new(ScriptedRosterRepository::new(false));
    let mut store = StudentClassStore::new(repo.clone());

    let entry = StudentClassRequest {
        class_id: "c-math".to_string(),
        student_id: "s9".to_string(),
        study_status: 1,
    };
    store.add_entry(&entry).await;

    assert_eq!(
        store.error_message.as_deref(),
        Some("student is already enrolled")
    );
    assert_eq!(
        repo.calls(),
        vec![Call::Add { class_id: "c-math".to_string(), student_id: "s9".to_string() }]
    );
    assert!(store.entries.is_empty());
}
