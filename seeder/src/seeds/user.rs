use crate::seed::Seeder;
use db::DomainError;
use db::models::user::{Model, Role};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;

pub const TEACHER_EMAIL: &str = "teacher@example.com";
pub const STUDENT_EMAIL: &str = "student@example.com";

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DomainError> {
        // Fixed accounts, skipped when a previous run created them
        if Model::find_by_email(db, TEACHER_EMAIL).await?.is_none() {
            Model::create(db, "Ms Naidoo", TEACHER_EMAIL, "password123", Role::Teacher).await?;
        }
        if Model::find_by_email(db, STUDENT_EMAIL).await?.is_none() {
            Model::create(db, "Thandi Mokoena", STUDENT_EMAIL, "password123", Role::Student)
                .await?;
        }

        // Random students; email collisions are simply skipped
        for _ in 0..10 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let _ = Model::create(db, &name, &email, "password123", Role::Student).await;
        }

        Ok(())
    }
}
