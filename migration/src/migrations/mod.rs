pub mod m202505290001_create_users;
pub mod m202505290003_create_questions;
pub mod m202505290004_create_attempts;
