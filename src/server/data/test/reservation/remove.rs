use super::*;

/// Tests deleting a reservation.
///
/// Verifies the reservation is gone while the car and user it referenced
/// are left in place.
///
/// Expected: Ok(())
#[tokio::test]
async fn removes_reservation_and_keeps_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, user, row) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    repo.remove(row.id).await?;

    assert!(repo.find_by_id(row.id).await?.is_none());
    assert!(CarRepository::new(db).find_by_id(car.car_id).await?.is_some());
    assert!(UserRepository::new(db).find_by_id(user.client).await?.is_some());

    Ok(())
}
