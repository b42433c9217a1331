use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(()) and only the other user remains
#[tokio::test]
async fn removes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_user(db).await?;
    let removed = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.remove(removed.client).await?;

    assert!(repo.find_by_id(removed.client).await?.is_none());
    assert!(repo.find_by_national_id(kept.id).await?.is_some());

    Ok(())
}
