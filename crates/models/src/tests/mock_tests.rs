use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

use crate::employee;

fn ana(id: i64) -> employee::Model {
    employee::Model { id, first_name: "Ana".into(), last_name: "Lee".into(), email: "ana@x.com".into() }
}

#[tokio::test]
async fn create_returns_row_with_assigned_id() -> anyhow::Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![ana(7)]])
        .into_connection();

    let created = employee::create(&db, "Ana", "Lee", "ana@x.com").await?;
    assert_eq!(created, ana(7));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    Ok(())
}

#[tokio::test]
async fn find_returns_none_for_missing_row() -> anyhow::Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<employee::Model>::new()])
        .into_connection();

    assert!(employee::find(&db, 42).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_reports_rows_affected() -> anyhow::Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult { last_insert_id: 0, rows_affected: 1 },
            MockExecResult { last_insert_id: 0, rows_affected: 0 },
        ])
        .into_connection();

    assert!(employee::delete(&db, 1).await?);
    assert!(!employee::delete(&db, 1).await?);

    let log = db.into_transaction_log();
    assert_eq!(
        log[0],
        Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM "employees" WHERE "employees"."id" = $1"#,
            [1i64.into()],
        )
    );
    Ok(())
}
