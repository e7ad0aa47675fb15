pub mod purchases;
pub mod users;
pub mod validation;

pub use purchases::PurchaseService;
pub use users::UserService;
pub use validation::RequestValidator;
