use super::*;

/// Tests saving a partially updated car.
///
/// Verifies that changed fields are written, untouched fields keep their
/// stored values and `created_at` is preserved.
///
/// Expected: Ok(Car) reflecting the update
#[tokio::test]
async fn saves_updated_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let mut car = repo.create(nof123()).await?;
    let created_at = car.created_at;

    car.apply(UpdateCarParam {
        license: Some("UUF098".to_string()),
        ..Default::default()
    });
    let saved = repo.save(car).await?;

    assert_eq!(saved.license, "UUF098");
    assert_eq!(saved.maker, "mercedes-benz");
    assert_eq!(saved.created_at, created_at);

    let stored = repo.find_by_id(saved.car_id).await?.unwrap();
    assert_eq!(stored.license, "UUF098");
    assert!(repo.find_by_license("NOF123").await?.is_none());

    Ok(())
}

/// Tests saving a car onto a license held by another car.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn fails_when_license_collides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    repo.create(nof123()).await?;
    let mut other = repo
        .create(CreateCarParam {
            license: "UUF098".to_string(),
            ..nof123()
        })
        .await?;

    other.license = "NOF123".to_string();
    let result = repo.save(other).await;

    assert!(result.is_err());

    Ok(())
}
