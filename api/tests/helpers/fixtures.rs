use db::authoring::{QuestionDraft, TestDraft, TestWithQuestions, create_test};
use db::models::user::{Model as UserModel, Role};
use sea_orm::DatabaseConnection;

pub struct Classroom {
    pub teacher: UserModel,
    pub students: Vec<UserModel>,
    pub test: TestWithQuestions,
}

/// A teacher, two students and a 50 point test (30 + 20).
pub async fn classroom(db: &DatabaseConnection) -> Classroom {
    let teacher = UserModel::create(db, "Ms Naidoo", "naidoo@school.test", "chalk42", Role::Teacher)
        .await
        .unwrap();
    let thandi = UserModel::create(db, "Thandi", "thandi@school.test", "secret1", Role::Student)
        .await
        .unwrap();
    let pieter = UserModel::create(db, "Pieter", "pieter@school.test", "secret1", Role::Student)
        .await
        .unwrap();

    let test = create_test(
        db,
        teacher.id,
        TestDraft {
            title: "Fractions".into(),
            subject: "Maths".into(),
            questions: vec![
                QuestionDraft {
                    text: "1/2 + 1/4?".into(),
                    options: vec!["3/4".into(), "2/6".into()],
                    correct_option: 0,
                    points: 30,
                },
                QuestionDraft {
                    text: "1/3 of 9?".into(),
                    options: vec!["6".into(), "3".into()],
                    correct_option: 1,
                    points: 20,
                },
            ],
        },
    )
    .await
    .unwrap();

    Classroom {
        teacher,
        students: vec![thandi, pieter],
        test,
    }
}
