use super::*;

/// Tests deleting a car.
///
/// Expected: Ok(()) and the car can no longer be found
#[tokio::test]
async fn removes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_car(db).await?;
    let removed = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    repo.remove(removed.car_id).await?;

    assert!(repo.find_by_id(removed.car_id).await?.is_none());
    assert!(repo.find_by_id(kept.car_id).await?.is_some());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}

/// Tests deleting a key that does not exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.remove(999).await;

    assert!(result.is_ok());

    Ok(())
}
