pub mod formatter;
pub mod lookup;
pub mod normalizer;
pub mod presenter;

pub use crate::domain::model::{Cnpj, CompanyRecord};
pub use crate::domain::ports::{ConfigProvider, RegistryClient};
pub use crate::utils::error::Result;
