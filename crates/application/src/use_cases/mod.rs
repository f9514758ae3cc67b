mod check_bulk;
mod check_email;

pub use check_bulk::{BatchOutcome, CheckBulkUseCase};
pub use check_email::CheckEmailUseCase;
