// src/modules/certification/application/services.rs

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::application::ports::{
    CertificationError, CertificationRepository, CertificationResult, CertificationStatusFilter,
    CertificationUseCases, CreateCertificationData, CreateCertificationInput,
    PatchCertificationData, PatchCertificationInput,
};
use crate::modules::storage::media_storage::MediaStorage;
use crate::shared::content::media::{self, ImageKind};
use crate::shared::content::ordering::ReorderItem;
use crate::shared::content::patch::PatchField;

const BADGE_PREFIX: &str = "certifications/badges";

pub struct CertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
    storage: Arc<dyn MediaStorage>,
}

impl<R> CertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> CertificationUseCases for CertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn list(
        &self,
        filter: CertificationStatusFilter,
    ) -> Result<Vec<CertificationResult>, CertificationError> {
        self.repository
            .list(filter, Utc::now().date_naive())
            .await
            .map_err(CertificationError::from)
    }

    async fn get(&self, id: Uuid) -> Result<CertificationResult, CertificationError> {
        self.repository
            .get(id)
            .await
            .map_err(CertificationError::from)
    }

    async fn create(
        &self,
        input: CreateCertificationInput,
    ) -> Result<CertificationResult, CertificationError> {
        // A never-expiring certification never stores an expiry date.
        let expiry_date = if input.does_not_expire {
            None
        } else {
            input.expiry_date
        };

        let badge_image = media::store_new(
            self.storage.as_ref(),
            ImageKind::Badge,
            BADGE_PREFIX,
            input.badge_image.as_ref(),
        )
        .await?;

        let data = CreateCertificationData {
            name: input.name,
            issuing_organization: input.issuing_organization,
            badge_image,
            issue_date: input.issue_date,
            expiry_date,
            does_not_expire: input.does_not_expire,
            sort_order: input.sort_order,
        };

        self.repository
            .create(data)
            .await
            .map_err(CertificationError::from)
    }

    async fn patch(
        &self,
        id: Uuid,
        input: PatchCertificationInput,
    ) -> Result<CertificationResult, CertificationError> {
        let current = self.repository.get(id).await?;

        let badge_image = media::apply_single(
            self.storage.as_ref(),
            ImageKind::Badge,
            BADGE_PREFIX,
            current.badge_image.as_deref(),
            input.badge_image.as_ref(),
            input.remove_badge_image,
        )
        .await?;

        let mut data = PatchCertificationData {
            name: input.name,
            issuing_organization: input.issuing_organization,
            badge_image,
            issue_date: input.issue_date,
            expiry_date: input.expiry_date,
            does_not_expire: input.does_not_expire,
            sort_order: input.sort_order,
        };

        let effective_does_not_expire = match data.does_not_expire {
            PatchField::Value(v) => v,
            _ => current.does_not_expire,
        };
        if effective_does_not_expire {
            data.expiry_date = PatchField::Null;
        }

        self.repository
            .patch(id, data)
            .await
            .map_err(CertificationError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificationError> {
        let current = self.repository.get(id).await?;

        media::delete_all(
            self.storage.as_ref(),
            current.badge_image.as_deref().into_iter(),
        )
        .await?;

        self.repository
            .delete(id)
            .await
            .map_err(CertificationError::from)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<(), CertificationError> {
        self.repository
            .reorder(items)
            .await
            .map_err(CertificationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    use crate::modules::certification::application::ports::CertificationRepositoryError;
    use crate::modules::storage::storage_memory::InMemoryMediaStorage;

    #[derive(Clone, Default)]
    struct MockCertificationRepo {
        current: Option<CertificationResult>,
        created: Arc<Mutex<Option<CreateCertificationData>>>,
        patched: Arc<Mutex<Option<PatchCertificationData>>>,
    }

    fn sample_result() -> CertificationResult {
        CertificationResult {
            id: Uuid::new_v4(),
            name: "Certified Kubernetes Administrator".to_string(),
            issuing_organization: "CNCF".to_string(),
            badge_image: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            expiry_date: Some(NaiveDate::from_ymd_opt(2027, 5, 1).unwrap()),
            does_not_expire: false,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl CertificationRepository for MockCertificationRepo {
        async fn list(
            &self,
            _filter: CertificationStatusFilter,
            _today: NaiveDate,
        ) -> Result<Vec<CertificationResult>, CertificationRepositoryError> {
            Ok(vec![])
        }

        async fn get(
            &self,
            _id: Uuid,
        ) -> Result<CertificationResult, CertificationRepositoryError> {
            self.current
                .clone()
                .ok_or(CertificationRepositoryError::NotFound)
        }

        async fn create(
            &self,
            data: CreateCertificationData,
        ) -> Result<CertificationResult, CertificationRepositoryError> {
            *self.created.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn patch(
            &self,
            _id: Uuid,
            data: PatchCertificationData,
        ) -> Result<CertificationResult, CertificationRepositoryError> {
            *self.patched.lock().unwrap() = Some(data);
            Ok(sample_result())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), CertificationRepositoryError> {
            Ok(())
        }

        async fn reorder(
            &self,
            _items: Vec<ReorderItem>,
        ) -> Result<(), CertificationRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_non_expiring_certification_nullifies_expiry() {
        let repo = MockCertificationRepo::default();
        let service =
            CertificationService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let input = CreateCertificationInput {
            name: "AWS Solutions Architect".to_string(),
            issuing_organization: "Amazon".to_string(),
            badge_image: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            // supplied but must not be stored
            expiry_date: Some(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()),
            does_not_expire: true,
            sort_order: 0,
        };

        service.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert!(created.does_not_expire);
        assert!(created.expiry_date.is_none());
    }

    #[tokio::test]
    async fn create_expiring_certification_keeps_expiry() {
        let repo = MockCertificationRepo::default();
        let service =
            CertificationService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let expiry = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let input = CreateCertificationInput {
            name: "AWS Solutions Architect".to_string(),
            issuing_organization: "Amazon".to_string(),
            badge_image: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date: Some(expiry),
            does_not_expire: false,
            sort_order: 0,
        };

        service.create(input).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.expiry_date, Some(expiry));
    }

    #[tokio::test]
    async fn patch_to_non_expiring_clears_stored_expiry() {
        let repo = MockCertificationRepo {
            current: Some(sample_result()),
            ..Default::default()
        };
        let service =
            CertificationService::new(repo.clone(), Arc::new(InMemoryMediaStorage::new()));

        let input = PatchCertificationInput {
            does_not_expire: PatchField::Value(true),
            expiry_date: PatchField::Value(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
            ..Default::default()
        };

        service.patch(Uuid::new_v4(), input).await.unwrap();

        let patched = repo.patched.lock().unwrap().clone().unwrap();
        assert!(patched.expiry_date.is_null());
    }

    #[tokio::test]
    async fn delete_removes_badge_from_storage() {
        let seed = "certifications/badges/cka.png";
        let mut existing = sample_result();
        existing.badge_image = Some(seed.to_string());

        let repo = MockCertificationRepo {
            current: Some(existing),
            ..Default::default()
        };
        let storage = InMemoryMediaStorage::new();
        storage.store(seed, vec![3], "image/png").await.unwrap();

        let service = CertificationService::new(repo, Arc::new(storage.clone()));
        service.delete(Uuid::new_v4()).await.unwrap();

        assert!(!storage.contains(seed));
    }
}
