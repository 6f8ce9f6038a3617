#![allow(dead_code)]

use async_trait::async_trait;
use phone_blocklist_application::ports::BlockedPhoneRepository;
use phone_blocklist_domain::{BlockRecord, DomainError, NewBlock};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockBlockedPhoneRepository {
    records: Arc<RwLock<Vec<BlockRecord>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockBlockedPhoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn active_count(&self, phone_number: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.is_active && r.phone_number.as_ref() == phone_number)
            .count()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }

    fn push(records: &mut Vec<BlockRecord>, block: &NewBlock) -> BlockRecord {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let record = BlockRecord {
            id: records.len() as i64 + 1,
            phone_number: block.phone_number.clone(),
            reason: block.reason.clone(),
            blocked_by: block.blocked_by.clone(),
            blocked_date: now.clone(),
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        };
        records.push(record.clone());
        record
    }

    fn newest_first(mut records: Vec<BlockRecord>) -> Vec<BlockRecord> {
        records.sort_by(|a, b| {
            b.blocked_date
                .cmp(&a.blocked_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }
}

#[async_trait]
impl BlockedPhoneRepository for MockBlockedPhoneRepository {
    async fn insert(&self, block: &NewBlock) -> Result<BlockRecord, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| r.is_active && r.phone_number == block.phone_number)
        {
            return Err(DomainError::AlreadyBlocked(block.phone_number.to_string()));
        }
        Ok(Self::push(&mut records, block))
    }

    async fn insert_if_not_active(
        &self,
        block: &NewBlock,
    ) -> Result<Option<BlockRecord>, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| r.is_active && r.phone_number == block.phone_number)
        {
            return Ok(None);
        }
        Ok(Some(Self::push(&mut records, block)))
    }

    async fn find_latest_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError> {
        Ok(self.list_history(phone_number).await?.into_iter().next())
    }

    async fn find_active_by_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<BlockRecord>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.is_active && r.phone_number.as_ref() == phone_number)
            .cloned())
    }

    async fn deactivate(&self, id: i64) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id && r.is_active) {
            Some(record) => {
                record.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_active(&self) -> Result<Vec<BlockRecord>, DomainError> {
        self.check_failure().await?;
        let records = self.records.read().await;
        Ok(Self::newest_first(
            records.iter().filter(|r| r.is_active).cloned().collect(),
        ))
    }

    async fn list_history(&self, phone_number: &str) -> Result<Vec<BlockRecord>, DomainError> {
        self.check_failure().await?;
        let records = self.records.read().await;
        Ok(Self::newest_first(
            records
                .iter()
                .filter(|r| r.phone_number.as_ref() == phone_number)
                .cloned()
                .collect(),
        ))
    }
}
