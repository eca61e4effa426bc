// Generated by svcgen. Do not edit by hand.

use svcgen_runtime::prelude::*;
use super::{User, UserRepository};

#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }
}

impl UserService {
    pub async fn save(&self, entity: User) -> ServiceResult {
        ServiceResponse::ok(self.repository.save(&entity).await?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn one(&self, id: u64) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("User", &id))?)
    }

    pub async fn all(&self, page: Option<u64>, page_size: Option<u64>) -> ServiceResult {
        let window = if let (Some(page), Some(page_size)) = (page, page_size) {
            PageWindow::new(page, page_size)
        } else {
            PageWindow::unrestricted()
        };
        ServiceResponse::ok(self.repository.find_all_paged(&window).await?)
    }

    pub async fn delete(&self, id: u64) -> ServiceResult {
        self.repository.delete_by_id(&id).await?;
        Ok(ServiceResponse::no_content())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn email(&self, id: u64) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("User", &id))?.email)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no entity matches `id`.
    pub async fn greeting(&self, id: u64, prefix: String) -> ServiceResult {
        ServiceResponse::ok(self.repository.find_by_id(&id).await?.ok_or_else(|| ServiceError::not_found("User", &id))?.greeting(prefix))
    }
}
