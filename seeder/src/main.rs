use crate::seed::{Seeder, run_seeder};
use crate::seeds::{attempt::AttemptSeeder, test::TestSeeder, user::UserSeeder};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use util::config;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    println!("Seeding {}", config::database_path());

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(TestSeeder), "Test"),
        (Box::new(AttemptSeeder), "Attempt"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
