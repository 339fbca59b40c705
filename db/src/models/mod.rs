pub mod attempt;
pub mod question;
pub mod user;

pub use attempt::Entity as Attempt;
pub use question::Entity as Question;
pub use test::Entity as Test;
pub use user::Entity as User;
