use super::*;

/// Tests saving a reservation that was re-pointed at another car and user.
///
/// Expected: Ok(()) and the re-fetched reservation shows the new relations
#[tokio::test]
async fn saves_new_relations_and_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, row) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_car = factory::create_car(db).await?;
    let other_user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let mut reservation = repo.find_by_id(row.id).await?.unwrap();

    reservation.car = CarRepository::new(db).find_by_id(other_car.car_id).await?;
    reservation.user = UserRepository::new(db).find_by_id(other_user.client).await?;
    reservation.notes = "Late pickup".to_string();
    repo.save(&reservation).await?;

    let stored = repo.find_by_id(row.id).await?.unwrap();
    assert_eq!(stored.car_id(), Some(other_car.car_id));
    assert_eq!(stored.user_id(), Some(other_user.client));
    assert_eq!(stored.notes, "Late pickup");
    assert_eq!(stored.ends_at, "2022-12-20 11:00:00");

    Ok(())
}
