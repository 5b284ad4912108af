use serde::Deserialize;

use crate::domain::audit::{AuditEntity, AuditEntryView, AuditListQuery};
use crate::domain::auth::AuthenticatedUser;
use crate::forms::empty_string_as_none;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::AuditReader;
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Query parameters accepted by the audit log page.
#[derive(Debug, Default, Deserialize)]
pub struct AuditQuery {
    /// Restricts the log to one entity type.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub entity: Option<AuditEntity>,
    /// Page number requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the audit log.
pub struct AuditPageData {
    /// Newest entries first.
    pub entries: Paginated<AuditEntryView>,
    /// Entity filter echoed back to the template.
    pub entity: Option<AuditEntity>,
}

/// Newest audit entries first, optionally for one entity type.
pub fn load_audit_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: AuditQuery,
) -> ServiceResult<AuditPageData>
where
    R: AuditReader + ?Sized,
{
    ensure_admin(user)?;

    let page = query.page.unwrap_or(1);
    let mut list_query = AuditListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(entity) = query.entity {
        list_query = list_query.entity_type(entity);
    }

    let (total, entries) = repo
        .list_audit_entries(list_query)
        .map_err(ServiceError::from)?;

    Ok(AuditPageData {
        entries: Paginated::from_total(entries, page, total, DEFAULT_ITEMS_PER_PAGE),
        entity: query.entity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FakeRepo, admin, operator};

    #[test]
    fn non_admin_is_rejected() {
        let mut repo = FakeRepo::default();
        repo.audit_reader.expect_list_audit_entries().never();

        let result = load_audit_page(&repo, &operator(), AuditQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn entity_filter_reaches_repository() {
        let mut repo = FakeRepo::default();
        repo.audit_reader
            .expect_list_audit_entries()
            .withf(|query| {
                query.entity_type == Some(AuditEntity::Invoice)
                    && query.pagination.is_some_and(|pagination| pagination.page == 3)
            })
            .times(1)
            .returning(|_| Ok((45, Vec::new())));

        let data = load_audit_page(
            &repo,
            &admin(),
            AuditQuery {
                entity: Some(AuditEntity::Invoice),
                page: Some(3),
            },
        )
        .expect("page");

        assert_eq!(data.entries.total_pages, 3);
        assert_eq!(data.entity, Some(AuditEntity::Invoice));
    }
}
