use crate::seed::Seeder;
use db::DomainError;
use db::authoring::{get_test, list_tests};
use db::grading::{Answer, submit_attempt};
use db::models::user::{Column as UserColumn, Entity as UserEntity, Role};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct AttemptSeeder;

#[async_trait::async_trait]
impl Seeder for AttemptSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DomainError> {
        // Send-compatible RNG
        let mut rng = StdRng::seed_from_u64(fastrand::u64(..));

        let students = UserEntity::find()
            .filter(UserColumn::Role.eq(Role::Student))
            .all(db)
            .await?;

        for summary in list_tests(db).await? {
            let full = get_test(db, summary.test.id).await?;

            for student in &students {
                // Leave some tests unanswered so the results page has gaps
                if rng.gen_bool(0.2) {
                    continue;
                }

                let answers: Vec<Answer> = full
                    .questions
                    .iter()
                    .map(|q| {
                        let option_count = q.option_labels().len().max(1) as i64;
                        let selected_option = if rng.gen_bool(0.6) {
                            q.correct_option
                        } else {
                            rng.gen_range(0..option_count)
                        };
                        Answer {
                            question_id: q.id,
                            selected_option,
                        }
                    })
                    .collect();

                match submit_attempt(db, full.test.id, student.id, &answers).await {
                    Ok(_) | Err(DomainError::Conflict(_)) => {}
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }
}
