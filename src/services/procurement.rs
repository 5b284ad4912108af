use crate::domain::auth::AuthenticatedUser;
use crate::domain::inventory::InventoryView;
use crate::domain::procurement::{PurchaseOrder, PurchaseOrderView, Supplier};
use crate::forms::procurement::{PurchaseOrderForm, SupplierForm};
use crate::repository::{
    InventoryReader, PurchaseOrderReader, PurchaseOrderWriter, SupplierReader, SupplierWriter,
};
use crate::services::{Saved, ServiceError, ServiceResult, today};

/// Data required to render the purchase orders page.
pub struct PurchaseOrdersPageData {
    /// Purchase orders with supplier and material names.
    pub orders: Vec<PurchaseOrderView>,
    /// Suppliers offered by the new order form.
    pub suppliers: Vec<Supplier>,
    /// Materials offered by the new order form.
    pub materials: Vec<InventoryView>,
}

pub fn load_suppliers<R>(repo: &R) -> ServiceResult<Vec<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    repo.list_suppliers().map_err(ServiceError::from)
}

pub fn save_supplier<R>(repo: &R, form: SupplierForm) -> ServiceResult<Saved>
where
    R: SupplierWriter + ?Sized,
{
    let supplier_id = form.supplier_id;
    let payload = form
        .into_new_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match supplier_id {
        Some(supplier_id) => {
            repo.update_supplier(supplier_id, &payload)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_supplier(&payload).map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

/// Suppliers still referenced by purchase orders or stock are kept.
pub fn delete_supplier<R>(repo: &R, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierWriter + ?Sized,
{
    repo.delete_supplier(supplier_id).map_err(ServiceError::from)
}

pub fn load_purchase_orders_page<R>(repo: &R) -> ServiceResult<PurchaseOrdersPageData>
where
    R: PurchaseOrderReader + SupplierReader + InventoryReader + ?Sized,
{
    let orders = repo.list_purchase_orders().map_err(ServiceError::from)?;
    let suppliers = repo.list_suppliers().map_err(ServiceError::from)?;
    let materials = repo.list_inventory().map_err(ServiceError::from)?;

    Ok(PurchaseOrdersPageData {
        orders,
        suppliers,
        materials,
    })
}

pub fn create_purchase_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: PurchaseOrderForm,
) -> ServiceResult<PurchaseOrder>
where
    R: PurchaseOrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order(today())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_purchase_order(&new_order, user.user_id)
        .map_err(ServiceError::from)
}

/// Receiving adds the ordered quantity to stock; a second receive is refused.
pub fn receive_purchase_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<PurchaseOrder>
where
    R: PurchaseOrderWriter + ?Sized,
{
    let order = repo
        .receive_purchase_order(order_id, user.user_id)
        .map_err(ServiceError::from)?;
    log::info!(
        "Purchase order #{} received: {} of material #{}",
        order.id,
        order.quantity,
        order.material_id
    );
    Ok(order)
}

pub fn delete_purchase_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<()>
where
    R: PurchaseOrderWriter + ?Sized,
{
    repo.delete_purchase_order(order_id, user.user_id)
        .map_err(ServiceError::from)
}
