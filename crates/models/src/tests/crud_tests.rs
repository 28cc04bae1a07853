use crate::db::connect_in_memory;
use crate::{lesson, order, student};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

/// Test order create, read, partial update and delete
#[tokio::test]
async fn test_order_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let created = order::Model {
        order_code: "A1".into(),
        food_name: "Pizza".into(),
        customer_name: "Jane".into(),
        customer_surname: "Doe".into(),
        customer_id: "C1".into(),
        delivery_address: "1 Main St".into(),
        payment_method: "Cash".into(),
    };
    created.clone().into_insert_model().insert(&db).await?;

    let found = order::Entity::find_by_id("A1".to_string()).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let patch: order::OrderPatch = serde_json::from_str(r#"{"food_name": "Burger"}"#)?;
    let mut am: order::ActiveModel = found.unwrap().into();
    patch.apply_active(&mut am);
    let updated = am.update(&db).await?;
    assert_eq!(updated.food_name, "Burger");
    assert_eq!(updated.customer_id, "C1");

    let res = order::Entity::delete_by_id("A1".to_string()).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let res = order::Entity::delete_by_id("A1".to_string()).exec(&db).await?;
    assert_eq!(res.rows_affected, 0);
    Ok(())
}

/// Test that students and lessons get increasing ids
#[tokio::test]
async fn test_university_auto_ids() -> Result<()> {
    let db = connect_in_memory().await?;

    let new_student = student::NewStudent {
        name: "Ada".into(),
        surname: "Lovelace".into(),
        age: "1815-12-10".into(),
        sex: "Female".into(),
        nationality: "British".into(),
        field_of_studying: "Mathematics".into(),
    };
    let a = new_student.clone().into_insert_model().insert(&db).await?;
    let b = new_student.into_insert_model().insert(&db).await?;
    assert!(b.id > a.id);

    let l = lesson::NewLesson { name: "Calculus".into(), field_of_studying: "Mathematics".into() }
        .into_insert_model()
        .insert(&db)
        .await?;
    assert_eq!(l.name, "Calculus");

    let all = student::Entity::find().order_by_asc(student::Column::Id).all(&db).await?;
    assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a.id, b.id]);
    Ok(())
}
