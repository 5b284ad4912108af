use serde::Deserialize;

use crate::domain::Priority;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::employee::Employee;
use crate::domain::inventory::InventoryView;
use crate::domain::job_card::{
    JobCard, JobCardDetails, JobCardListQuery, JobCardView, JobStatus, MaterialUsage,
};
use crate::domain::order::{OrderStatus, OrderView};
use crate::forms::empty_string_as_none;
use crate::forms::jobs::{MaterialUsageForm, NewJobCardForm, UpdateJobStatusPayload};
use crate::repository::{
    EmployeeReader, InventoryReader, JobCardReader, JobCardWriter, OrderReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the job list.
#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    /// Shows only jobs in this status.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<JobStatus>,
    /// Shows only jobs with this priority.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub priority: Option<Priority>,
}

/// Data required to render the job list.
pub struct JobsPageData {
    /// Matching job cards with assignee and order details.
    pub jobs: Vec<JobCardView>,
    /// Status filter echoed back to the template.
    pub status: Option<JobStatus>,
    /// Priority filter echoed back to the template.
    pub priority: Option<Priority>,
}

pub struct JobFormData {
    /// Active employees a job can be assigned to.
    pub employees: Vec<Employee>,
    /// Orders a job can be linked to.
    pub orders: Vec<OrderView>,
}

pub struct JobPageData {
    /// The job with its assignments, progress logs and material usage.
    pub job: JobCardDetails,
    /// Materials offered by the usage form.
    pub materials: Vec<InventoryView>,
}

pub fn load_jobs_page<R>(repo: &R, query: JobsQuery) -> ServiceResult<JobsPageData>
where
    R: JobCardReader + ?Sized,
{
    let mut list_query = JobCardListQuery::default();
    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }
    if let Some(priority) = query.priority {
        list_query = list_query.priority(priority);
    }

    let jobs = repo.list_job_cards(list_query).map_err(ServiceError::from)?;

    Ok(JobsPageData {
        jobs,
        status: query.status,
        priority: query.priority,
    })
}

pub fn load_job_form<R>(repo: &R) -> ServiceResult<JobFormData>
where
    R: EmployeeReader + OrderReader + ?Sized,
{
    let employees = repo.list_active_employees().map_err(ServiceError::from)?;
    let orders = repo
        .list_orders_with_status(OrderStatus::SCHEDULABLE)
        .map_err(ServiceError::from)?;

    Ok(JobFormData { employees, orders })
}

pub fn create_job<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: NewJobCardForm,
) -> ServiceResult<JobCard>
where
    R: JobCardWriter + ?Sized,
{
    let new_job = form
        .into_new_job()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_job_card(&new_job, user.user_id)
        .map_err(ServiceError::from)
}

pub fn load_job<R>(repo: &R, job_id: i32) -> ServiceResult<JobPageData>
where
    R: JobCardReader + InventoryReader + ?Sized,
{
    let job = repo
        .get_job_card_details(job_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    let materials = repo.list_inventory().map_err(ServiceError::from)?;

    Ok(JobPageData { job, materials })
}

/// Assignments, progress logs and material usage go with the job card.
pub fn delete_job<R>(repo: &R, user: &AuthenticatedUser, job_id: i32) -> ServiceResult<()>
where
    R: JobCardWriter + ?Sized,
{
    repo.delete_job_card(job_id, user.user_id)
        .map_err(ServiceError::from)
}

pub fn record_material_usage<R>(
    repo: &R,
    job_id: i32,
    form: MaterialUsageForm,
) -> ServiceResult<MaterialUsage>
where
    R: JobCardReader + JobCardWriter + ?Sized,
{
    let usage = form
        .into_new_usage(job_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.get_job_card(job_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.record_material_usage(&usage)
        .map_err(ServiceError::from)
}

/// Applies a status change from the job board.
///
/// The progress log is attributed to the session employee. Completing a
/// job marks its order delivered.
pub fn update_job_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: UpdateJobStatusPayload,
) -> ServiceResult<JobCard>
where
    R: JobCardWriter + ?Sized,
{
    let change = payload
        .into_change(user.employee_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let job = repo
        .update_job_status(&change, user.user_id)
        .map_err(ServiceError::from)?;
    log::info!(
        "Job card #{} moved to {} by {}",
        job.id,
        job.status,
        user.username
    );
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::{FakeRepo, datetime, operator};

    fn job(id: i32, status: JobStatus) -> JobCard {
        JobCard {
            id,
            related_order_id: Some(31),
            job_type: "Delivery".to_string(),
            description: "Deliver 12.5 units to Tower B".to_string(),
            assigned_to: None,
            status,
            priority: Priority::Medium,
            scheduled_start: None,
            scheduled_end: None,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn payload(status: &str) -> UpdateJobStatusPayload {
        UpdateJobStatusPayload {
            job_id: 9,
            status: status.to_string(),
            notes: Some("Pour finished at 14:10".to_string()),
        }
    }

    #[test]
    fn jobs_page_applies_filters() {
        let mut repo = FakeRepo::default();
        repo.job_card_reader
            .expect_list_job_cards()
            .withf(|query| {
                query.status == Some(JobStatus::InProgress)
                    && query.priority == Some(Priority::High)
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let data = load_jobs_page(
            &repo,
            JobsQuery {
                status: Some(JobStatus::InProgress),
                priority: Some(Priority::High),
            },
        )
        .expect("page");

        assert!(data.jobs.is_empty());
    }

    #[test]
    fn status_update_is_logged_by_session_employee() {
        let mut repo = FakeRepo::default();
        repo.job_card_writer
            .expect_update_job_status()
            .withf(|change, actor| {
                change.job_id == 9
                    && change.status == JobStatus::Completed
                    && change.updated_by == Some(12)
                    && *actor == 7
            })
            .times(1)
            .returning(|change, _| Ok(job(change.job_id, change.status)));

        let updated = update_job_status(&repo, &operator(), payload("completed")).expect("job");

        assert_eq!(updated.status, JobStatus::Completed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut repo = FakeRepo::default();
        repo.job_card_writer.expect_update_job_status().never();

        let result = update_job_status(&repo, &operator(), payload("Finished"));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn unknown_job_is_not_found() {
        let mut repo = FakeRepo::default();
        repo.job_card_writer
            .expect_update_job_status()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = update_job_status(&repo, &operator(), payload("Open"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn usage_for_missing_job_is_not_found() {
        let mut repo = FakeRepo::default();
        repo.job_card_reader
            .expect_get_job_card()
            .returning(|_| Ok(None));
        repo.job_card_writer.expect_record_material_usage().never();

        let form = MaterialUsageForm {
            material_id: 2,
            quantity_used: 3.5,
        };

        let result = record_material_usage(&repo, 404, form);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
