use super::*;

/// Tests listing reservations with relations.
///
/// Verifies that every reservation carries its own car and user, including
/// when reservations reference different rows.
///
/// Expected: Ok(Vec<Reservation>) ordered by key with relations loaded
#[tokio::test]
async fn finds_all_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (car_a, user_a, first) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let (car_b, user_b, second) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_all().await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, first.id);
    assert_eq!(reservations[0].car_id(), Some(car_a.car_id));
    assert_eq!(reservations[0].user_id(), Some(user_a.client));
    assert_eq!(reservations[1].id, second.id);
    assert_eq!(reservations[1].car_id(), Some(car_b.car_id));
    assert_eq!(reservations[1].user_id(), Some(user_b.client));

    Ok(())
}

/// Tests loading a reservation whose references are empty.
///
/// Expected: Ok(Some(Reservation)) with no car and no user
#[tokio::test]
async fn finds_reservation_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    let user = factory::create_user(db).await?;
    let row = factory::reservation::ReservationFactory::new(db, car.car_id, user.client)
        .without_car()
        .without_user()
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.find_by_id(row.id).await?.unwrap();

    assert!(reservation.car.is_none());
    assert!(reservation.user.is_none());

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 1);
    assert!(all[0].user.is_none());

    Ok(())
}

/// Tests finding a reservation key that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}

/// Tests that deleting a referenced car clears the relation.
///
/// Expected: reservation kept with no car and the user still loaded
#[tokio::test]
async fn clears_car_after_car_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, user, row) = factory::helpers::create_reservation_with_dependencies(db).await?;

    CarRepository::new(db).remove(car.car_id).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.find_by_id(row.id).await?.unwrap();

    assert!(reservation.car.is_none());
    assert_eq!(reservation.user_id(), Some(user.client));

    Ok(())
}
