use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect, db_tests_disabled};
use crate::employee;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Test employee create / read / overwrite / delete
#[tokio::test]
async fn test_employee_crud() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let created = employee::create(&db, "Ana", "Lee", "ana@x.com").await?;
    assert!(created.id > 0);
    assert_eq!(created.first_name, "Ana");

    let found = employee::find(&db, created.id).await?.expect("row exists");
    assert_eq!(found, created);

    let mut changed = found.clone();
    changed.email = "a@y.com".into();
    let updated = employee::overwrite(&db, changed).await?;
    assert_eq!(updated.email, "a@y.com");
    assert_eq!(updated.last_name, "Lee");

    assert!(employee::delete(&db, created.id).await?);
    assert!(employee::find(&db, created.id).await?.is_none());
    assert!(!employee::delete(&db, created.id).await?);

    Ok(())
}

/// Ids come from a sequence and are not handed out again after deletion
#[tokio::test]
async fn test_ids_not_reused() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let first = employee::create(&db, "Id", "Probe", "one@example.com").await?;
    employee::delete(&db, first.id).await?;
    let second = employee::create(&db, "Id", "Probe", "two@example.com").await?;
    assert!(second.id > first.id);

    employee::delete(&db, second.id).await?;
    Ok(())
}
