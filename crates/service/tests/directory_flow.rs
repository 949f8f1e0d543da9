use std::path::PathBuf;
use std::sync::Arc;

use models::{UserServiceInput, REFERENCE};
use service::form::ServiceForm;
use service::listing::{FilterCriteria, SearchOutcome, SortBy};
use service::navigation::Route;
use service::presentation::PageView;
use service::profile::{ListingStore, ProfileStore};
use service::storage::{JsonMapStore, KeyValueStore};
use service::{Directory, DirectorySettings, ServiceError};

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("servicehub_flow_{}.json", uuid::Uuid::new_v4()))
}

fn acme() -> UserServiceInput {
    UserServiceInput {
        name: "Acme Repairs".into(),
        category: "plumbing".into(),
        description: "Fix pipes".into(),
        location: "Colombo".into(),
        skills: vec!["Pipe Repair".into()],
        phone: "+94771234567".into(),
        ..UserServiceInput::default()
    }
}

#[tokio::test]
async fn listing_lifecycle_survives_restarts() -> anyhow::Result<()> {
    let path = temp_path();

    let created = {
        let store = ProfileStore::open(&path, "myServices").await?;
        assert!(store.list().await.is_empty());
        store.create(acme()).await?
    };

    // a second session sees the record written by the first
    let store = ProfileStore::open(&path, "myServices").await?;
    let listed = store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    let mut edited = acme();
    edited.name = "Acme Repairs Ltd".into();
    let updated = store.update(&created.id, edited).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    let store = ProfileStore::open(&path, "myServices").await?;
    assert_eq!(store.get(&created.id).await.map(|s| s.name), Some("Acme Repairs Ltd".into()));
    assert!(store.delete(&created.id).await?);

    let store = ProfileStore::open(&path, "myServices").await?;
    assert!(store.list().await.is_empty());

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn blob_is_a_json_array_under_the_storage_key() -> anyhow::Result<()> {
    let path = temp_path();
    let store = ProfileStore::open(&path, "myServices").await?;
    let created = store.create(acme()).await?;

    let kv = JsonMapStore::<String>::new(&path).await?;
    let blob = kv.get_item("myServices").await?.expect("blob present");
    let value: serde_json::Value = serde_json::from_str(&blob)?;
    let first = &value[0];
    assert_eq!(first["id"], created.id.as_str());
    assert_eq!(first["createdAt"], created.created_at.as_str());
    assert_eq!(first["skills"][0], "Pipe Repair");

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn directory_browses_seeds_and_user_listings_together() -> anyhow::Result<()> {
    let path = temp_path();
    let store: Arc<dyn ListingStore> = ProfileStore::open(&path, "myServices").await?;
    let directory = Directory::seeded(store, DirectorySettings::default());

    let mut form = ServiceForm {
        name: "Colombo Leak Busters".into(),
        category: "plumbing".into(),
        description: "Emergency leak repairs".into(),
        location: "Colombo".into(),
        phone: "077 000 0000".into(),
        ..ServiceForm::default()
    };
    form.add_skill("Leak Detection");
    let created = directory.submit_create(form).await?;

    let view = directory
        .browse(FilterCriteria::new().category("plumbing").location("Colombo").sort(SortBy::Newest))
        .await;
    let ids: Vec<&str> = view.outcome.providers().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![created.id.as_str(), "1"]);
    assert_eq!(view.active_filters, 2);

    let everything = directory.browse(FilterCriteria::new()).await;
    assert_eq!(everything.outcome.len(), REFERENCE.providers().len() + 1);

    let nothing = directory.browse(FilterCriteria::new().search("zzz")).await;
    assert_eq!(nothing.outcome, SearchOutcome::Empty);

    match directory.render(&Route::profile(&created.id)).await? {
        PageView::Profile(view) => assert_eq!(view.contact.call, "tel:0770000000"),
        other => panic!("unexpected view {other:?}"),
    }

    assert!(directory.delete(&created.id).await?);
    assert!(matches!(
        directory.render(&Route::edit(&created.id)).await,
        Err(ServiceError::NotFound(_))
    ));

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}
