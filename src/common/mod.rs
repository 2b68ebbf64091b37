mod error;

pub use error::{FormStoreError, FormStoreResult};
