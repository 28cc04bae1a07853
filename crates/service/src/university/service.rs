use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::lesson::{Lesson, LessonPatch, NewLesson};
use models::student::{NewStudent, Student, StudentPatch};

use super::repository::{
    mock::{MemoryLessonRepository, MemoryStudentRepository},
    LessonRepository, SeaOrmLessonRepository, SeaOrmStudentRepository, StudentRepository,
};
use crate::errors::ServiceError;
use crate::observe::record;

#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmStudentRepository { db }))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStudentRepository::default()))
    }

    #[instrument(skip_all)]
    pub async fn register(&self, input: NewStudent) -> Result<Student, ServiceError> {
        let res: Result<Student, ServiceError> = async {
            input.validate()?;
            let s = self.repo.insert(input).await?;
            info!(id = s.id, "student registered");
            Ok(s)
        }
        .await;
        record("student", "create", res)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Student, ServiceError> {
        let res = self.repo.find(id).await.and_then(|s| s.ok_or_else(|| ServiceError::not_found("Student")));
        record("student", "get", res)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        record("student", "list", self.repo.list().await)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: StudentPatch) -> Result<Student, ServiceError> {
        let res: Result<Student, ServiceError> = async {
            patch.validate()?;
            self.repo.update(id, &patch).await
        }
        .await;
        record("student", "update", res)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = match self.repo.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::not_found("Student")),
            Err(e) => Err(e),
        };
        record("student", "delete", res)
    }
}

#[derive(Clone)]
pub struct LessonService {
    repo: Arc<dyn LessonRepository>,
}

impl LessonService {
    pub fn new(repo: Arc<dyn LessonRepository>) -> Self {
        Self { repo }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmLessonRepository { db }))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryLessonRepository::default()))
    }

    #[instrument(skip_all)]
    pub async fn add(&self, input: NewLesson) -> Result<Lesson, ServiceError> {
        let res: Result<Lesson, ServiceError> = async {
            input.validate()?;
            let l = self.repo.insert(input).await?;
            info!(id = l.id, name = %l.name, "lesson added");
            Ok(l)
        }
        .await;
        record("lesson", "create", res)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Lesson, ServiceError> {
        let res = self.repo.find(id).await.and_then(|l| l.ok_or_else(|| ServiceError::not_found("Lesson")));
        record("lesson", "get", res)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Lesson>, ServiceError> {
        record("lesson", "list", self.repo.list().await)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: LessonPatch) -> Result<Lesson, ServiceError> {
        let res: Result<Lesson, ServiceError> = async {
            patch.validate()?;
            self.repo.update(id, &patch).await
        }
        .await;
        record("lesson", "update", res)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = match self.repo.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::not_found("Lesson")),
            Err(e) => Err(e),
        };
        record("lesson", "delete", res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::patch::Patch;

    fn ada() -> NewStudent {
        NewStudent {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            age: "1815-12-10".into(),
            sex: "Female".into(),
            nationality: "British".into(),
            field_of_studying: "Mathematics".into(),
        }
    }

    #[tokio::test]
    async fn student_register_list_update_delete() -> anyhow::Result<()> {
        let db = get_db().await?;
        for (name, svc) in [("memory", StudentService::in_memory()), ("sqlite", StudentService::seaorm(db))] {
            assert!(svc.list().await?.is_empty(), "{name}");

            let a = svc.register(ada()).await?;
            let b = svc.register(NewStudent { name: "Alan".into(), surname: "Turing".into(), sex: "Male".into(), ..ada() }).await?;
            assert_eq!(a.id, 1, "{name}");
            assert_eq!(b.id, 2, "{name}");
            let names: Vec<_> = svc.list().await?.into_iter().map(|s| s.name).collect();
            assert_eq!(names, vec!["Ada", "Alan"], "{name}");

            let patch = StudentPatch { nationality: Patch::Value("English".into()), ..Default::default() };
            let updated = svc.update(a.id, patch).await?;
            assert_eq!(updated.nationality, "English", "{name}");
            assert_eq!(updated.surname, "Lovelace", "{name}");

            svc.delete(a.id).await?;
            assert!(matches!(svc.get(a.id).await, Err(ServiceError::NotFound(_))), "{name}");
            assert!(matches!(svc.delete(a.id).await, Err(ServiceError::NotFound(_))), "{name}");

            // ids are not reused after a delete
            let c = svc.register(ada()).await?;
            assert_eq!(c.id, 3, "{name}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn student_validation() -> anyhow::Result<()> {
        let svc = StudentService::in_memory();
        let blank = NewStudent { surname: " ".into(), ..ada() };
        assert!(matches!(svc.register(blank).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.update(1, StudentPatch::default()).await, Err(ServiceError::Validation(_))));
        let patch = StudentPatch { age: Patch::Value("20".into()), ..Default::default() };
        assert!(matches!(svc.update(1, patch).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn lesson_add_and_list() -> anyhow::Result<()> {
        let db = get_db().await?;
        for (name, svc) in [("memory", LessonService::in_memory()), ("sqlite", LessonService::seaorm(db))] {
            assert!(svc.list().await?.is_empty(), "{name}");
            let l = svc.add(NewLesson { name: "Calculus".into(), field_of_studying: "Mathematics".into() }).await?;
            assert_eq!(svc.get(l.id).await?, l, "{name}");

            let patch = LessonPatch { name: Patch::Null, ..Default::default() };
            assert!(matches!(svc.update(l.id, patch).await, Err(ServiceError::Validation(_))), "{name}");

            let bad = NewLesson { name: "".into(), field_of_studying: "Physics".into() };
            assert!(matches!(svc.add(bad).await, Err(ServiceError::Validation(_))), "{name}");
            assert_eq!(svc.list().await?.len(), 1, "{name}");
        }
        Ok(())
    }
}
