use super::*;

/// Tests inserting a reservation for an existing car and user.
///
/// Verifies that both foreign keys are written in the same insert so the
/// re-fetched reservation carries both relations.
///
/// Expected: Ok(id) and a reservation with car and user loaded
#[tokio::test]
async fn creates_reservation_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let id = repo.create(param(), car.car_id, user.client).await?;

    let reservation = repo.find_by_id(id).await?.unwrap();

    assert_eq!(reservation.car_id(), Some(car.car_id));
    assert_eq!(reservation.user_id(), Some(user.client));
    assert_eq!(reservation.starts_at, "2022-12-10 10:00:00");
    assert_eq!(reservation.ends_at, "2022-12-20 11:00:00");
    assert_eq!(reservation.notes, "Lorem ipsum dolor sit amet");

    Ok(())
}

/// Tests reserving the same car twice.
///
/// Expected: Ok for both inserts; a car may appear in many reservations
#[tokio::test]
async fn allows_multiple_reservations_per_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    repo.create(param(), car.car_id, user.client).await?;
    repo.create(param(), car.car_id, user.client).await?;

    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}
