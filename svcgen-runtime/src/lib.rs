//! Runtime contract for generated services.
//!
//! Generated code only needs `use svcgen_runtime::prelude::*;` plus the
//! entity and repository types it serves.

pub mod error;
pub mod page;
pub mod repository;
pub mod response;

pub use error::{DataError, ServiceError};
pub use page::{Page, PageWindow, MAX_PAGE_SIZE};
pub use repository::CrudRepository;
pub use response::{ResponseStatus, ServiceResponse, ServiceResult};

pub mod prelude {
    //! Re-exports of everything generated services reference.
    pub use crate::{
        CrudRepository, DataError, Page, PageWindow, ResponseStatus, ServiceError,
        ServiceResponse, ServiceResult, MAX_PAGE_SIZE,
    };
}
