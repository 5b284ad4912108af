use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::compliance::{ComplianceStatus, ComplianceView};
use crate::domain::employee::EmployeeView;
use crate::domain::vehicle::VehicleView;
use crate::forms::compliance::ComplianceForm;
use crate::forms::empty_string_as_none;
use crate::repository::{ComplianceReader, ComplianceWriter, EmployeeReader, VehicleReader};
use crate::services::{Saved, ServiceError, ServiceResult, today};

/// Query parameters accepted by the compliance page.
#[derive(Debug, Default, Deserialize)]
pub struct ComplianceQuery {
    /// Shows only documents in this expiry state.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<ComplianceStatus>,
}

/// Data required to render the compliance register.
pub struct CompliancePageData {
    /// Documents ordered by expiry date.
    pub documents: Vec<ComplianceView>,
    /// Status filter echoed back to the template.
    pub status: Option<ComplianceStatus>,
    /// Vehicles a document can be attached to.
    pub vehicles: Vec<VehicleView>,
    /// Employees a document can be attached to.
    pub employees: Vec<EmployeeView>,
}

/// Documents by expiry date, optionally narrowed to one derived status.
pub fn load_compliance_page<R>(
    repo: &R,
    query: ComplianceQuery,
) -> ServiceResult<CompliancePageData>
where
    R: ComplianceReader + VehicleReader + EmployeeReader + ?Sized,
{
    let documents = repo
        .list_compliance_documents(today())
        .map_err(ServiceError::from)?
        .into_iter()
        .filter(|document| query.status.is_none_or(|status| document.status == status))
        .collect();
    let vehicles = repo.list_vehicles().map_err(ServiceError::from)?;
    let employees = repo.list_employees().map_err(ServiceError::from)?;

    Ok(CompliancePageData {
        documents,
        status: query.status,
        vehicles,
        employees,
    })
}

pub fn save_compliance_document<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ComplianceForm,
) -> ServiceResult<Saved>
where
    R: ComplianceWriter + ?Sized,
{
    let document_id = form.document_id;
    let payload = form
        .into_new_document()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match document_id {
        Some(document_id) => {
            repo.update_compliance_document(document_id, &payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_compliance_document(&payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_compliance_document<R>(
    repo: &R,
    user: &AuthenticatedUser,
    document_id: i32,
) -> ServiceResult<()>
where
    R: ComplianceWriter + ?Sized,
{
    repo.delete_compliance_document(document_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compliance::ComplianceDocument;
    use crate::services::test_support::{FakeRepo, date, operator};

    fn document(id: i32, expiry: Option<chrono::NaiveDate>) -> ComplianceView {
        ComplianceView::new(
            ComplianceDocument {
                id,
                title: format!("Permit {id}"),
                document_type: "Pollution Certificate".to_string(),
                reference_no: None,
                vehicle_id: None,
                employee_id: None,
                issue_date: None,
                expiry_date: expiry,
                notes: None,
            },
            None,
            None,
            date(2025, 6, 1),
        )
    }

    #[test]
    fn status_filter_keeps_matching_documents() {
        let mut repo = FakeRepo::default();
        repo.compliance_reader
            .expect_list_compliance_documents()
            .returning(|_| {
                Ok(vec![
                    document(1, Some(date(2025, 5, 1))),
                    document(2, Some(date(2025, 6, 20))),
                    document(3, Some(date(2026, 1, 1))),
                    document(4, None),
                ])
            });
        repo.vehicle_reader
            .expect_list_vehicles()
            .returning(|| Ok(Vec::new()));
        repo.employee_reader
            .expect_list_employees()
            .returning(|| Ok(Vec::new()));

        let data = load_compliance_page(
            &repo,
            ComplianceQuery {
                status: Some(ComplianceStatus::Expired),
            },
        )
        .expect("page");

        let ids: Vec<i32> = data.documents.iter().map(|view| view.document.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn expiry_before_issue_is_rejected() {
        let mut repo = FakeRepo::default();
        repo.compliance_writer
            .expect_create_compliance_document()
            .never();

        let form = ComplianceForm {
            document_id: None,
            title: "Fitness certificate".to_string(),
            document_type: "Vehicle Fitness".to_string(),
            reference_no: None,
            vehicle_id: Some(3),
            employee_id: None,
            issue_date: Some(date(2025, 6, 1)),
            expiry_date: Some(date(2025, 1, 1)),
            notes: None,
        };

        let result = save_compliance_document(&repo, &operator(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
