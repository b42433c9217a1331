use super::*;

/// Tests listing cars.
///
/// Expected: Ok(Vec<Car>) ordered by surrogate key
#[tokio::test]
async fn finds_all_cars_in_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_car(db).await?;
    let second = factory::create_car(db).await?;
    let third = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_all().await?;

    let ids: Vec<i32> = cars.iter().map(|car| car.car_id).collect();
    assert_eq!(ids, vec![first.car_id, second.car_id, third.car_id]);

    Ok(())
}

/// Tests listing cars on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn finds_no_cars_on_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.find_all().await?.is_empty());

    Ok(())
}

/// Tests finding a car by surrogate key.
///
/// Expected: Ok(Some(Car)) for an existing key, Ok(None) otherwise
#[tokio::test]
async fn finds_car_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let found = repo.find_by_id(created.car_id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().license, created.id);
    assert!(repo.find_by_id(created.car_id + 100).await?.is_none());

    Ok(())
}

/// Tests finding a car by license plate.
///
/// Expected: Ok(Some(Car)) for a registered license, Ok(None) otherwise
#[tokio::test]
async fn finds_car_by_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::car::CarFactory::new(db)
        .license("UUF098")
        .build()
        .await?;

    let repo = CarRepository::new(db);

    let found = repo.find_by_license("UUF098").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().license, "UUF098");
    assert!(repo.find_by_license("XXX000").await?.is_none());

    Ok(())
}
