use crate::database::memory::MemoryCollection;
use crate::models::announcement::Announcement;
use crate::models::quiz::Quiz;
use crate::routes;
use crate::services::announcements::AnnouncementService;
use crate::services::clock::ManualClock;
use crate::services::quizzes::QuizService;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// Services over fresh in-memory collections sharing one manual clock.
pub struct TestContext {
    pub clock: Arc<ManualClock>,
    announcements: web::Data<AnnouncementService>,
    quizzes: web::Data<QuizService>,
}

impl TestContext {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(start()));
        let announcements = AnnouncementService::new(
            Arc::new(MemoryCollection::<Announcement>::new()),
            clock.clone(),
        );
        let quizzes = QuizService::new(Arc::new(MemoryCollection::<Quiz>::new()), clock.clone());

        Self {
            clock,
            announcements: web::Data::new(announcements),
            quizzes: web::Data::new(quizzes),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.announcements.clone())
            .app_data(self.quizzes.clone())
            .configure(routes::api::scoped_config)
    }
}
