use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::{Product, UpdateProduct};
use crate::forms::products::SaveProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{Saved, ServiceError, ServiceResult, now};

/// Concrete grades ordered by name.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

pub fn save_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveProductForm,
) -> ServiceResult<Saved>
where
    R: ProductWriter + ?Sized,
{
    let product_id = form.product_id;
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match product_id {
        Some(product_id) => {
            let updates = UpdateProduct {
                name: payload.name,
                mix_design: payload.mix_design,
                unit: payload.unit,
                unit_price_cents: payload.unit_price_cents,
                updated_at: now(),
            };
            repo.update_product(product_id, &updates, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_product(&payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id, user.user_id)
        .map_err(ServiceError::from)
}
