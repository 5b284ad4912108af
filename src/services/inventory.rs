use crate::domain::auth::AuthenticatedUser;
use crate::domain::inventory::InventoryView;
use crate::domain::procurement::Supplier;
use crate::forms::inventory::SaveInventoryForm;
use crate::repository::{InventoryReader, InventoryWriter, SupplierReader};
use crate::services::{Saved, ServiceError, ServiceResult, today};

pub struct InventoryPageData {
    /// Materials with supplier names and stock status.
    pub items: Vec<InventoryView>,
    /// Suppliers offered by the material form.
    pub suppliers: Vec<Supplier>,
}

pub fn load_inventory_page<R>(repo: &R) -> ServiceResult<InventoryPageData>
where
    R: InventoryReader + SupplierReader + ?Sized,
{
    let items = repo.list_inventory().map_err(ServiceError::from)?;
    let suppliers = repo.list_suppliers().map_err(ServiceError::from)?;
    Ok(InventoryPageData { items, suppliers })
}

/// Creates a material, or updates the one named by `material_id`.
/// Either way `last_updated` becomes today.
pub fn save_inventory_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveInventoryForm,
) -> ServiceResult<Saved>
where
    R: InventoryWriter + ?Sized,
{
    match form.material_id {
        Some(material_id) => {
            let updates = form
                .into_update_item(today())
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.update_inventory_item(material_id, &updates, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            let new_item = form
                .into_new_item(today())
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.create_inventory_item(&new_item, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_inventory_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    material_id: i32,
) -> ServiceResult<()>
where
    R: InventoryWriter + ?Sized,
{
    repo.delete_inventory_item(material_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::{InventoryItem, StockStatus};
    use crate::services::test_support::{FakeRepo, date, operator};

    fn item(id: i32, stock: f64) -> InventoryItem {
        InventoryItem {
            id,
            name: "20mm Aggregate".to_string(),
            supplier_id: Some(1),
            current_stock: stock,
            unit: "tonnes".to_string(),
            threshold: 50.0,
            last_updated: date(2025, 6, 1),
        }
    }

    fn form(material_id: Option<i32>) -> SaveInventoryForm {
        SaveInventoryForm {
            material_id,
            name: "20mm Aggregate".to_string(),
            supplier_id: Some(1),
            current_stock: 120.0,
            unit: "tonnes".to_string(),
            threshold: 50.0,
        }
    }

    #[test]
    fn page_lists_items_and_suppliers() {
        let mut repo = FakeRepo::default();
        repo.inventory_reader.expect_list_inventory().returning(|| {
            Ok(vec![
                InventoryView::new(item(1, 20.0), Some("Stone Crushers".to_string())),
                InventoryView::new(item(2, 80.0), None),
            ])
        });
        repo.supplier_reader
            .expect_list_suppliers()
            .returning(|| Ok(Vec::new()));

        let data = load_inventory_page(&repo).expect("page");

        assert_eq!(data.items[0].stock_status, StockStatus::Low);
        assert_eq!(data.items[1].stock_status, StockStatus::Normal);
    }

    #[test]
    fn save_with_material_id_updates_and_stamps_today() {
        let mut repo = FakeRepo::default();
        repo.inventory_writer
            .expect_update_inventory_item()
            .withf(|id, updates, _| *id == 2 && updates.last_updated == today())
            .times(1)
            .returning(|_, _, _| Ok(item(2, 120.0)));

        let saved = save_inventory_item(&repo, &operator(), form(Some(2))).expect("saved");

        assert_eq!(saved, Saved::Updated);
    }

    #[test]
    fn save_without_id_creates() {
        let mut repo = FakeRepo::default();
        repo.inventory_writer
            .expect_create_inventory_item()
            .times(1)
            .returning(|_, _| Ok(item(3, 120.0)));

        let saved = save_inventory_item(&repo, &operator(), form(None)).expect("saved");

        assert_eq!(saved, Saved::Created);
    }
}
