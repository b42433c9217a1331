use super::*;

/// Tests inserting a new car.
///
/// Verifies that the repository persists every field, assigns a positive
/// surrogate key and stamps both timestamps.
///
/// Expected: Ok(Car) with the submitted fields
#[tokio::test]
async fn creates_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo.create(nof123()).await?;

    assert!(car.car_id > 0);
    assert_eq!(car.license, "NOF123");
    assert_eq!(car.maker, "mercedes-benz");
    assert_eq!(car.model, 2023);
    assert_eq!(car.reference, "GLC300");
    assert_eq!(car.color, "blue");
    assert_eq!(car.milage, 31278);
    assert_eq!(car.created_at, car.updated_at);

    Ok(())
}

/// Tests inserting a car whose license is already registered.
///
/// Verifies that the unique constraint on the license column rejects the
/// second insert and leaves a single row behind.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    repo.create(nof123()).await?;

    let result = repo.create(nof123()).await;

    assert!(result.is_err());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
