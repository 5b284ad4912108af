use crate::domain::assignment::AssignmentView;
use crate::domain::employee::Employee;
use crate::domain::equipment::{Equipment, EquipmentStatus};
use crate::domain::job_card::{JobCardListQuery, JobCardView};
use crate::domain::vehicle::{Vehicle, VehicleStatus};
use crate::forms::assignments::{EditAssignmentForm, NewAssignmentForm};
use crate::repository::{
    AssignmentReader, AssignmentWriter, EmployeeReader, EquipmentReader, JobCardReader,
    VehicleReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the assignments page.
pub struct AssignmentsPageData {
    /// Current assignments with job, crew and machine names.
    pub assignments: Vec<AssignmentView>,
    /// Open and in-progress jobs that can take new resources.
    pub jobs: Vec<JobCardView>,
    /// Active employees offered by the crew select.
    pub employees: Vec<Employee>,
    /// Available vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Operational machines.
    pub equipment: Vec<Equipment>,
}

pub fn load_assignments_page<R>(repo: &R) -> ServiceResult<AssignmentsPageData>
where
    R: AssignmentReader
        + JobCardReader
        + EmployeeReader
        + VehicleReader
        + EquipmentReader
        + ?Sized,
{
    let assignments = repo.list_assignments().map_err(ServiceError::from)?;
    let jobs = repo
        .list_job_cards(JobCardListQuery::default())
        .map_err(ServiceError::from)?
        .into_iter()
        .filter(|view| view.job.status.is_active())
        .collect();
    let employees = repo.list_active_employees().map_err(ServiceError::from)?;
    let vehicles = repo
        .list_vehicles_with_status(VehicleStatus::Available)
        .map_err(ServiceError::from)?;
    let equipment = repo
        .list_equipment_with_status(EquipmentStatus::Operational)
        .map_err(ServiceError::from)?;

    Ok(AssignmentsPageData {
        assignments,
        jobs,
        employees,
        vehicles,
        equipment,
    })
}

pub fn create_assignment<R>(repo: &R, form: NewAssignmentForm) -> ServiceResult<i32>
where
    R: AssignmentWriter + ?Sized,
{
    let new_assignment = form
        .into_new_assignment()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_assignment(&new_assignment)
        .map_err(ServiceError::from)
}

pub fn update_assignment<R>(
    repo: &R,
    assignment_id: i32,
    form: EditAssignmentForm,
) -> ServiceResult<()>
where
    R: AssignmentWriter + ?Sized,
{
    let updates = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_assignment(assignment_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_assignment<R>(repo: &R, assignment_id: i32) -> ServiceResult<()>
where
    R: AssignmentWriter + ?Sized,
{
    repo.delete_assignment(assignment_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::domain::job_card::{JobCard, JobStatus};
    use crate::services::test_support::{FakeRepo, datetime};

    fn job_view(id: i32, status: JobStatus) -> JobCardView {
        JobCardView {
            job: JobCard {
                id,
                related_order_id: None,
                job_type: "Pump Job".to_string(),
                description: "Slab pour".to_string(),
                assigned_to: None,
                status,
                priority: Priority::Medium,
                scheduled_start: None,
                scheduled_end: None,
                created_at: datetime(),
                updated_at: datetime(),
            },
            assigned_to_name: None,
        }
    }

    #[test]
    fn page_offers_only_active_jobs_and_free_resources() {
        let mut repo = FakeRepo::default();
        repo.assignment_reader
            .expect_list_assignments()
            .returning(|| Ok(Vec::new()));
        repo.job_card_reader.expect_list_job_cards().returning(|_| {
            Ok(vec![
                job_view(1, JobStatus::Open),
                job_view(2, JobStatus::Completed),
                job_view(3, JobStatus::InProgress),
            ])
        });
        repo.employee_reader
            .expect_list_active_employees()
            .returning(|| Ok(Vec::new()));
        repo.vehicle_reader
            .expect_list_vehicles_with_status()
            .withf(|status| *status == VehicleStatus::Available)
            .returning(|_| Ok(Vec::new()));
        repo.equipment_reader
            .expect_list_equipment_with_status()
            .withf(|status| *status == EquipmentStatus::Operational)
            .returning(|_| Ok(Vec::new()));

        let data = load_assignments_page(&repo).expect("page");

        let ids: Vec<i32> = data.jobs.iter().map(|view| view.job.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_assignment_is_rejected() {
        let mut repo = FakeRepo::default();
        repo.assignment_writer.expect_create_assignment().never();

        let form = NewAssignmentForm {
            job_card_id: 1,
            employee_id: None,
            role_in_job: None,
            vehicle_id: None,
            equipment_id: None,
        };

        let result = create_assignment(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn blank_edit_fields_clear_resources() {
        let mut repo = FakeRepo::default();
        repo.assignment_writer
            .expect_update_assignment()
            .withf(|id, updates| {
                *id == 4 && updates.vehicle_id.is_none() && updates.employee_id == Some(2)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let form = EditAssignmentForm {
            employee_id: Some(2),
            role_in_job: Some("Operator".to_string()),
            vehicle_id: None,
            equipment_id: None,
        };

        assert!(update_assignment(&repo, 4, form).is_ok());
    }
}
