// Generated by svcgen. Do not edit by hand.

use svcgen_runtime::prelude::*;
use super::{Product, ProductRepository};

#[derive(Clone)]
pub struct ProductService {
    repository: ProductRepository,
}

impl ProductService {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }
}

impl ProductService {
    pub async fn save(&self, entity: Product) -> ServiceResult {
        ServiceResponse::ok(self.repository.save(&entity).await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn one(&self, id: i64) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("Product", &id))?)
    }

    pub async fn all_by_filter(&self, category: String, r#type: String, page: Option<u64>, page_size: Option<u64>) -> ServiceResult {
        let window = if let (Some(page), Some(page_size)) = (page, page_size) {
            PageWindow::new(page, page_size)
        } else {
            PageWindow::unrestricted()
        };
        ServiceResponse::ok(self.repository.all_by_filter(category, r#type, &window).await?)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult {
        self.repository.delete_by_id(&id).await?;
        Ok(ServiceResponse::no_content())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn unit_price(&self, id: i64) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("Product", &id))?.unit_price)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn r#type(&self, id: i64) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("Product", &id))?.r#type)
    }
}
