use crate::domain::integration::IntegrationEventView;
use crate::repository::{IntegrationReader, IntegrationWriter};
use crate::services::{ServiceError, ServiceResult};

/// Number of events shown on the integration page.
pub const RECENT_EVENTS: i64 = 20;

pub fn load_integration_page<R>(repo: &R) -> ServiceResult<Vec<IntegrationEventView>>
where
    R: IntegrationReader + ?Sized,
{
    repo.list_recent_events(RECENT_EVENTS).map_err(ServiceError::from)
}

/// Creates a delivery job card for every confirmed order that has none.
///
/// Returns the number of job cards created; a second run creates none.
pub fn auto_create_jobs<R>(repo: &R, default_assignee: Option<i32>) -> ServiceResult<usize>
where
    R: IntegrationWriter + ?Sized,
{
    let created = repo
        .auto_create_jobs(default_assignee)
        .map_err(ServiceError::from)?;
    log::info!("Auto-created {created} delivery job card(s)");
    Ok(created)
}

/// Deducts material used by completed jobs from stock, once per job.
pub fn sync_inventory<R>(repo: &R) -> ServiceResult<usize>
where
    R: IntegrationWriter + ?Sized,
{
    let synced = repo.sync_inventory().map_err(ServiceError::from)?;
    log::info!("Synced inventory for {synced} completed job(s)");
    Ok(synced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::FakeRepo;

    #[test]
    fn auto_create_passes_default_assignee() {
        let mut repo = FakeRepo::default();
        repo.integration_writer
            .expect_auto_create_jobs()
            .withf(|assignee| *assignee == Some(4))
            .times(1)
            .returning(|_| Ok(2));

        assert_eq!(auto_create_jobs(&repo, Some(4)).expect("created"), 2);
    }

    #[test]
    fn page_requests_twenty_events() {
        let mut repo = FakeRepo::default();
        repo.integration_reader
            .expect_list_recent_events()
            .withf(|limit| *limit == 20)
            .returning(|_| Ok(Vec::new()));

        assert!(load_integration_page(&repo).expect("events").is_empty());
    }

    #[test]
    fn failed_sync_is_internal() {
        let mut repo = FakeRepo::default();
        repo.integration_writer
            .expect_sync_inventory()
            .returning(|| Err(RepositoryError::ConnectionError("database is locked".to_string())));

        assert!(matches!(sync_inventory(&repo), Err(ServiceError::Internal(_))));
    }
}
