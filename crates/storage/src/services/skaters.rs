//! Skater writes: the derived age is computed from the birth date at
//! create/edit time and stored as-is. It is never recomputed as time
//! passes, so the displayed age drifts until the next edit.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::skater::{CreateSkaterRequest, UpdateSkaterRequest};
use crate::entity::Stored;
use crate::error::Result;
use crate::files::FileStorage;
use crate::models::Skater;
use crate::repository::Repository;
use crate::store::DocumentStore;

pub fn derived_age(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub async fn create_skater(
    store: &dyn DocumentStore,
    req: CreateSkaterRequest,
    actor: &str,
) -> Result<Stored<Skater>> {
    let now = Utc::now();
    let skater = Skater {
        age: derived_age(req.birth_date, now.date_naive()),
        full_name: req.full_name,
        national_id: req.national_id,
        birth_date: req.birth_date,
        team_id: req.team_id,
        medical_exam_url: req.medical_exam_url,
        id_document_url: req.id_document_url,
        created_at: now,
        created_by: actor.to_string(),
        updated_at: None,
        updated_by: None,
    };
    Repository::<Skater>::new(store).create(&skater).await
}

pub async fn update_skater(
    store: &dyn DocumentStore,
    id: &str,
    req: UpdateSkaterRequest,
    actor: &str,
) -> Result<Stored<Skater>> {
    let repo = Repository::<Skater>::new(store);
    let existing = repo.get(id).await?;

    let now = Utc::now();
    let mut record = existing.record;
    if let Some(full_name) = req.full_name {
        record.full_name = full_name;
    }
    if let Some(national_id) = req.national_id {
        record.national_id = national_id;
    }
    if let Some(birth_date) = req.birth_date {
        record.birth_date = birth_date;
    }
    if let Some(team_id) = req.team_id {
        record.team_id = team_id;
    }
    // Age is re-fixed at edit time, whether or not the birth date moved.
    record.age = derived_age(record.birth_date, now.date_naive());
    record.updated_at = Some(now);
    record.updated_by = Some(actor.to_string());

    repo.update(id, &record).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MedicalExam,
    Identification,
}

impl DocumentKind {
    fn path_segment(self) -> &'static str {
        match self {
            DocumentKind::MedicalExam => "medical-exam",
            DocumentKind::Identification => "identification",
        }
    }
}

/// Upload a skater document through the file storage collaborator and
/// store the returned URL on the skater. The bytes are never validated.
pub async fn attach_document(
    store: &dyn DocumentStore,
    files: &dyn FileStorage,
    id: &str,
    kind: DocumentKind,
    filename: &str,
    bytes: &[u8],
    actor: &str,
) -> Result<String> {
    let repo = Repository::<Skater>::new(store);
    let existing = repo.get(id).await?;

    let path = format!("skaters/{}/{}/{}", id, kind.path_segment(), filename);
    let url = files.upload(&path, bytes).await?;

    let mut record = existing.record;
    match kind {
        DocumentKind::MedicalExam => record.medical_exam_url = Some(url.clone()),
        DocumentKind::Identification => record.id_document_url = Some(url.clone()),
    }
    record.updated_at = Some(Utc::now());
    record.updated_by = Some(actor.to_string());
    repo.update(id, &record).await?;

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::files::MemoryFileStorage;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = date(2014, 6, 15);
        assert_eq!(derived_age(birth, date(2026, 6, 14)), 11);
        assert_eq!(derived_age(birth, date(2026, 6, 15)), 12);
        assert_eq!(derived_age(birth, date(2026, 12, 1)), 12);
    }

    fn create_request(national_id: &str) -> CreateSkaterRequest {
        CreateSkaterRequest {
            full_name: "Jane".to_string(),
            national_id: national_id.to_string(),
            birth_date: date(2014, 5, 1),
            team_id: "alpha".to_string(),
            medical_exam_url: None,
            id_document_url: None,
        }
    }

    #[tokio::test]
    async fn create_fixes_age_from_birth_date() {
        let store = MemoryStore::new();
        let stored = create_skater(&store, create_request("111.222.333-44"), "system")
            .await
            .unwrap();
        let expected = derived_age(date(2014, 5, 1), Utc::now().date_naive());
        assert_eq!(stored.record.age, expected);
    }

    #[tokio::test]
    async fn second_active_skater_with_same_cpf_rejected() {
        let store = MemoryStore::new();
        create_skater(&store, create_request("111.222.333-44"), "system")
            .await
            .unwrap();
        let err = create_skater(&store, create_request("111.222.333-44"), "system")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn attach_document_stores_returned_url_only() {
        let store = MemoryStore::new();
        let files = MemoryFileStorage::new();
        let stored = create_skater(&store, create_request("111.222.333-44"), "system")
            .await
            .unwrap();

        let url = attach_document(
            &store,
            &files,
            &stored.id,
            DocumentKind::MedicalExam,
            "exam.pdf",
            b"%PDF-1.4",
            "ana@fed.org",
        )
        .await
        .unwrap();

        assert!(files.contains(&format!("skaters/{}/medical-exam/exam.pdf", stored.id)));
        let fetched = Repository::<Skater>::new(&store)
            .get(&stored.id)
            .await
            .unwrap();
        assert_eq!(fetched.record.medical_exam_url.as_deref(), Some(url.as_str()));
        assert_eq!(fetched.record.updated_by.as_deref(), Some("ana@fed.org"));
    }
}
