use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use models::lesson::{self, Lesson, LessonPatch, NewLesson};
use models::student::{self, NewStudent, Student, StudentPatch};

use crate::db::map_db_err;
use crate::errors::ServiceError;
use crate::storage::memory_table::MemoryTable;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError>;
    async fn list(&self) -> Result<Vec<Student>, ServiceError>;
    async fn update(&self, id: i32, patch: &StudentPatch) -> Result<Student, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn insert(&self, input: NewLesson) -> Result<Lesson, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Lesson>, ServiceError>;
    async fn list(&self) -> Result<Vec<Lesson>, ServiceError>;
    async fn update(&self, id: i32, patch: &LessonPatch) -> Result<Lesson, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

fn map_update_err(entity: &str, e: DbErr) -> ServiceError {
    match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity),
        e => map_db_err(e),
    }
}

/// SeaORM-backed student repository.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError> {
        input.into_insert_model().insert(&self.db).await.map_err(map_db_err)
    }

    async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        student::Entity::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }

    async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update(&self, id: i32, patch: &StudentPatch) -> Result<Student, ServiceError> {
        let Some(existing) = self.find(id).await? else {
            return Err(ServiceError::not_found("Student"));
        };
        let mut am: student::ActiveModel = existing.into();
        patch.apply_active(&mut am);
        am.update(&self.db).await.map_err(|e| map_update_err("Student", e))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = student::Entity::delete_by_id(id).exec(&self.db).await.map_err(map_db_err)?;
        Ok(res.rows_affected > 0)
    }
}

/// SeaORM-backed lesson repository.
pub struct SeaOrmLessonRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl LessonRepository for SeaOrmLessonRepository {
    async fn insert(&self, input: NewLesson) -> Result<Lesson, ServiceError> {
        input.into_insert_model().insert(&self.db).await.map_err(map_db_err)
    }

    async fn find(&self, id: i32) -> Result<Option<Lesson>, ServiceError> {
        lesson::Entity::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }

    async fn list(&self) -> Result<Vec<Lesson>, ServiceError> {
        lesson::Entity::find()
            .order_by_asc(lesson::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update(&self, id: i32, patch: &LessonPatch) -> Result<Lesson, ServiceError> {
        let Some(existing) = self.find(id).await? else {
            return Err(ServiceError::not_found("Lesson"));
        };
        let mut am: lesson::ActiveModel = existing.into();
        patch.apply_active(&mut am);
        am.update(&self.db).await.map_err(|e| map_update_err("Lesson", e))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = lesson::Entity::delete_by_id(id).exec(&self.db).await.map_err(map_db_err)?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory repositories. Ids start at 1 and are never reused, matching
/// SQLite `AUTOINCREMENT`.
pub mod mock {
    use super::*;

    pub struct MemoryStudentRepository {
        rows: MemoryTable<i32, Student>,
        next_id: AtomicI32,
    }

    impl Default for MemoryStudentRepository {
        fn default() -> Self {
            Self { rows: MemoryTable::default(), next_id: AtomicI32::new(1) }
        }
    }

    #[async_trait]
    impl StudentRepository for MemoryStudentRepository {
        async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError> {
            let s = input.into_model(self.next_id.fetch_add(1, Ordering::SeqCst));
            self.rows.update_map(|m| {
                m.insert(s.id, s.clone());
                Ok(s)
            })
        }

        async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError> {
            Ok(self.rows.get(&id))
        }

        async fn list(&self) -> Result<Vec<Student>, ServiceError> {
            Ok(self.rows.list())
        }

        async fn update(&self, id: i32, patch: &StudentPatch) -> Result<Student, ServiceError> {
            self.rows.update_map(|m| {
                let s = m.get_mut(&id).ok_or_else(|| ServiceError::not_found("Student"))?;
                patch.apply(s);
                Ok(s.clone())
            })
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.remove(&id))
        }
    }

    pub struct MemoryLessonRepository {
        rows: MemoryTable<i32, Lesson>,
        next_id: AtomicI32,
    }

    impl Default for MemoryLessonRepository {
        fn default() -> Self {
            Self { rows: MemoryTable::default(), next_id: AtomicI32::new(1) }
        }
    }

    #[async_trait]
    impl LessonRepository for MemoryLessonRepository {
        async fn insert(&self, input: NewLesson) -> Result<Lesson, ServiceError> {
            let l = input.into_model(self.next_id.fetch_add(1, Ordering::SeqCst));
            self.rows.update_map(|m| {
                m.insert(l.id, l.clone());
                Ok(l)
            })
        }

        async fn find(&self, id: i32) -> Result<Option<Lesson>, ServiceError> {
            Ok(self.rows.get(&id))
        }

        async fn list(&self) -> Result<Vec<Lesson>, ServiceError> {
            Ok(self.rows.list())
        }

        async fn update(&self, id: i32, patch: &LessonPatch) -> Result<Lesson, ServiceError> {
            self.rows.update_map(|m| {
                let l = m.get_mut(&id).ok_or_else(|| ServiceError::not_found("Lesson"))?;
                patch.apply(l);
                Ok(l.clone())
            })
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.remove(&id))
        }
    }
}
