pub use crate::cli::{Console, command, run_app, run_menu};
pub use crate::domain::{
    DeleteOutcome, Listing, LoadStatus,
    contact::{self, Contact},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, DEFAULT_STORAGE_PATH, memory, stores};
