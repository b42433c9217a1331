use super::*;

/// Tests saving a partially updated user.
///
/// Expected: Ok(User) with the changed field written and the others kept
#[tokio::test]
async fn saves_updated_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let mut user = repo.create(walter()).await?;

    user.apply(UpdateUserParam {
        lastname: Some("Heisenberg".to_string()),
        ..Default::default()
    });
    let saved = repo.save(user).await?;

    assert_eq!(saved.lastname, "Heisenberg");
    assert_eq!(saved.name, "Walter");
    assert_eq!(saved.national_id, 1234567890);

    let stored = repo.find_by_id(saved.client).await?.unwrap();
    assert_eq!(stored.lastname, "Heisenberg");

    Ok(())
}
