use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::{OrderStatus, OrderView};
use crate::domain::organization::Location;
use crate::domain::product::Product;
use crate::domain::production::{BatchView, ProductionBatch, QualityCheck, QualityCheckView};
use crate::forms::production::{NewBatchForm, QualityCheckForm};
use crate::repository::{
    OrderReader, OrganizationReader, ProductReader, ProductionReader, ProductionWriter,
};
use crate::services::{ServiceError, ServiceResult, now};

/// Options for the new-batch form.
pub struct BatchFormData {
    /// Orders a batch can be produced for.
    pub orders: Vec<OrderView>,
    /// Mixes offered by the product select.
    pub products: Vec<Product>,
    /// Plants a batch can be produced at.
    pub locations: Vec<Location>,
}

pub struct QualityPageData {
    /// The batch under test.
    pub batch: BatchView,
    /// Recorded checks, newest first.
    pub checks: Vec<QualityCheckView>,
}

pub fn load_batches<R>(repo: &R) -> ServiceResult<Vec<BatchView>>
where
    R: ProductionReader + ?Sized,
{
    repo.list_batches().map_err(ServiceError::from)
}

/// Only orders that are confirmed or already in production can be batched.
pub fn load_batch_form<R>(repo: &R) -> ServiceResult<BatchFormData>
where
    R: OrderReader + ProductReader + OrganizationReader + ?Sized,
{
    let orders = repo
        .list_orders_with_status(OrderStatus::SCHEDULABLE)
        .map_err(ServiceError::from)?;
    let products = repo.list_products().map_err(ServiceError::from)?;
    let locations = repo.list_locations().map_err(ServiceError::from)?;

    Ok(BatchFormData {
        orders,
        products,
        locations,
    })
}

pub fn create_batch<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: NewBatchForm,
) -> ServiceResult<ProductionBatch>
where
    R: ProductionWriter + ?Sized,
{
    let new_batch = form
        .into_new_batch(now(), user.user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_batch(&new_batch).map_err(ServiceError::from)
}

pub fn load_batch<R>(repo: &R, batch_id: i32) -> ServiceResult<BatchView>
where
    R: ProductionReader + ?Sized,
{
    repo.get_batch(batch_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn load_quality_page<R>(repo: &R, batch_id: i32) -> ServiceResult<QualityPageData>
where
    R: ProductionReader + ?Sized,
{
    let batch = load_batch(repo, batch_id)?;
    let checks = repo
        .list_quality_checks(batch_id)
        .map_err(ServiceError::from)?;
    Ok(QualityPageData { batch, checks })
}

/// Records a test against an existing batch, tested by the session employee.
pub fn add_quality_check<R>(
    repo: &R,
    user: &AuthenticatedUser,
    batch_id: i32,
    form: QualityCheckForm,
) -> ServiceResult<QualityCheck>
where
    R: ProductionReader + ProductionWriter + ?Sized,
{
    let new_check = form
        .into_new_check(batch_id, user.employee_id, now())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    load_batch(repo, batch_id)?;

    repo.add_quality_check(&new_check)
        .map_err(ServiceError::from)
}
