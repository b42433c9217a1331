use super::*;

/// Tests listing users.
///
/// Expected: Ok(Vec<User>) ordered by client key
#[tokio::test]
async fn finds_all_users_in_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_all().await?;

    let keys: Vec<i32> = users.iter().map(|user| user.client).collect();
    assert_eq!(keys, vec![first.client, second.client]);

    Ok(())
}

/// Tests finding a user by client key.
///
/// Expected: Ok(Some(User)) for an existing key, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(created.client).await?;
    assert_eq!(found.map(|user| user.national_id), Some(created.id));
    assert!(repo.find_by_id(created.client + 100).await?.is_none());

    Ok(())
}

/// Tests finding a user by national identification number.
///
/// Expected: Ok(Some(User)) for a registered number, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_national_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .national_id(987654321)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_national_id(987654321).await?;
    assert_eq!(found.map(|user| user.client), Some(created.client));
    assert!(repo.find_by_national_id(111111111).await?.is_none());

    Ok(())
}
