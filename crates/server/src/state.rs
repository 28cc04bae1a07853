use sea_orm::DatabaseConnection;
use service::order::OrderService;
use service::university::{LessonService, StudentService};

#[derive(Clone)]
pub struct RestaurantState {
    pub orders: OrderService,
}

impl RestaurantState {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self { orders: OrderService::seaorm(db) }
    }

    pub fn in_memory() -> Self {
        Self { orders: OrderService::in_memory() }
    }
}

#[derive(Clone)]
pub struct UniversityState {
    pub students: StudentService,
    pub lessons: LessonService,
}

impl UniversityState {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            students: StudentService::seaorm(db.clone()),
            lessons: LessonService::seaorm(db),
        }
    }

    pub fn in_memory() -> Self {
        Self { students: StudentService::in_memory(), lessons: LessonService::in_memory() }
    }
}
