//! `SeaOrmDogStore` against a real database. Skips when `SKIP_DB_TESTS` is
//! set or the database is unreachable.

use migration::MigratorTrait;
use serde_json::json;
use service::dog::{DogChanges, DogService, DogStore, NewDog, SeaOrmDogStore, StoreError};
use std::sync::Arc;

async fn store() -> Option<SeaOrmDogStore> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return None; }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(SeaOrmDogStore::new(db))
}

fn rex() -> NewDog {
    NewDog { name: "Rex".into(), description: "good boy".into(), age: 3, breed: "Lab".into() }
}

#[tokio::test]
async fn crud_through_store() -> anyhow::Result<()> {
    let Some(store) = store().await else { return Ok(()) };

    let created = store.create(rex()).await?;
    assert!(created.id > 0);
    assert_eq!(store.find_unique(created.id).await?, Some(created.clone()));

    let changes = DogChanges { age: Some(4), ..Default::default() };
    let updated = store.update(created.id, changes).await?;
    assert_eq!(updated.age, 4);
    assert_eq!(updated.name, "Rex");

    // Empty change set returns the current row.
    assert_eq!(store.update(created.id, DogChanges::default()).await?, updated);

    let deleted = store.delete(created.id).await?;
    assert_eq!(deleted, updated);
    assert_eq!(store.find_unique(created.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn missing_rows_are_not_found() -> anyhow::Result<()> {
    let Some(store) = store().await else { return Ok(()) };

    let created = store.create(rex()).await?;
    store.delete(created.id).await?;

    assert_eq!(store.update(created.id, DogChanges::default()).await.unwrap_err(), StoreError::NotFound(created.id));
    assert_eq!(store.delete(created.id).await.unwrap_err(), StoreError::NotFound(created.id));
    Ok(())
}

#[tokio::test]
async fn service_round_trip_on_database() -> anyhow::Result<()> {
    let Some(store) = store().await else { return Ok(()) };
    let svc = DogService::new(Arc::new(store));

    let created = svc.create(&json!({"name": "Fido", "description": "fetches", "age": 5, "breed": "Mutt"})).await?;
    let id = created.id.to_string();
    assert_eq!(svc.get(&id).await?, Some(created.clone()));
    assert!(svc.list().await?.iter().any(|d| d.id == created.id));

    svc.update(&id, &json!({"name": "Fido II"})).await?;
    assert_eq!(svc.get(&id).await?.map(|d| d.name), Some("Fido II".to_string()));

    svc.delete(&id).await?;
    assert_eq!(svc.get(&id).await?, None);
    Ok(())
}
