use super::*;

/// Tests inserting a new user.
///
/// Expected: Ok(User) with a generated client key and the submitted fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(walter()).await?;

    assert!(user.client > 0);
    assert_eq!(user.national_id, 1234567890);
    assert_eq!(user.name, "Walter");
    assert_eq!(user.lastname, "White");
    assert_eq!(user.dob, "1973-06-12");

    Ok(())
}

/// Tests inserting a user whose national id is already registered.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_national_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(walter()).await?;

    let result = repo
        .create(CreateUserParam {
            name: "Jesse".to_string(),
            ..walter()
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
