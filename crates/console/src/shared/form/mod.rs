pub mod session;
pub mod staged;

pub use session::{FormCommit, FormMode, FormSession};
pub use staged::{Stage, StagedForm};
