pub mod catalog;

pub use crate::domain::model::{Artist, Concert};
pub use crate::domain::ports::{ConcertRepository, ConfigProvider, DocumentSource};
pub use crate::utils::error::Result;
