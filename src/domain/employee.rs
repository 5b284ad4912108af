use chrono::NaiveDate;
use serde::Serialize;

labeled_enum! {
    /// Employment state; only `Active` employees can be assigned to jobs.
    pub enum EmployeeStatus {
        Active => "Active",
        Inactive => "Inactive",
        OnLeave => "On Leave",
    }
    default = Active;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_joining: NaiveDate,
    pub status: EmployeeStatus,
}

/// Employee row with the role and department names resolved for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeView {
    #[serde(flatten)]
    pub employee: Employee,
    pub role_name: Option<String>,
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_joining: NaiveDate,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEmployee {
    pub name: String,
    pub role_id: Option<i32>,
    pub department_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: EmployeeStatus,
}
