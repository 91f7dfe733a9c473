pub mod category;
pub mod leave_request;
pub mod lenient;
pub mod role;
pub mod status;
pub mod user;

pub use category::{CutiType, LeaveCategory};
pub use leave_request::LeaveRequest;
pub use role::Role;
pub use status::Status;
pub use user::User;
