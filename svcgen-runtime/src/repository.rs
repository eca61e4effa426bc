use crate::error::DataError;
use crate::page::{Page, PageWindow};
use std::future::Future;

/// Persistence contract behind every generated service.
///
/// Uses RPITIT (return-position `impl Trait` in traits), so implementations
/// may be written with plain `async fn`.
///
/// Filtered listing is not part of the trait: its signature depends on the
/// entity's filter fields, so repositories of filterable entities provide an
/// inherent `all_by_filter` taking those fields in declaration order, plus a
/// trailing `&PageWindow` when the entity is paginated.
pub trait CrudRepository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    fn find_by_id(&self, id: &ID) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    fn find_all_paged(
        &self,
        window: &PageWindow,
    ) -> impl Future<Output = Result<Page<T>, DataError>> + Send;
    fn save(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;
    /// Returns whether a row was removed.
    fn delete_by_id(&self, id: &ID) -> impl Future<Output = Result<bool, DataError>> + Send;
}
