mod database;
mod handlers;
mod models;
mod requests;
mod routes;
mod services;
mod settings;
mod utils;

#[cfg(test)]
mod tests;

use crate::database::collection::{AnnouncementCollection, QuizCollection};
use crate::database::connection::{create_pool, run_migrations};
use crate::database::memory::MemoryCollection;
use crate::database::postgres::{PgAnnouncements, PgQuizzes};
use crate::models::announcement::Announcement;
use crate::models::quiz::Quiz;
use crate::services::announcements::AnnouncementService;
use crate::services::clock::{Clock, SystemClock};
use crate::services::quizzes::QuizService;
use crate::settings::{Settings, StorageBackend};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn open_collections(
    settings: &Settings,
) -> anyhow::Result<(Arc<AnnouncementCollection>, Arc<dyn QuizCollection>)> {
    match settings.storage {
        StorageBackend::Postgres => {
            let database_url = settings
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            let pool = create_pool(database_url, settings.database_max_connections)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;

            let announcements: Arc<AnnouncementCollection> =
                Arc::new(PgAnnouncements::new(pool.clone()));
            let quizzes: Arc<dyn QuizCollection> = Arc::new(PgQuizzes::new(pool));
            Ok((announcements, quizzes))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            let announcements: Arc<AnnouncementCollection> =
                Arc::new(MemoryCollection::<Announcement>::new());
            let quizzes: Arc<dyn QuizCollection> = Arc::new(MemoryCollection::<Quiz>::new());
            Ok((announcements, quizzes))
        }
    }
}

fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;
    info!("Starting dashboard API with {:?} storage", settings.storage);

    let (announcements, quizzes) = open_collections(&settings).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let announcement_service = web::Data::new(AnnouncementService::new(
        announcements,
        Arc::clone(&clock),
    ));
    let quiz_service = web::Data::new(QuizService::new(quizzes, clock));
    let cors_origin = settings.cors_origin.clone();

    let (host, port) = settings.bind_address();
    info!("Listening on http://{}:{}/api", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(announcement_service.clone())
            .app_data(quiz_service.clone())
            .wrap(cors(&cors_origin))
            .wrap(Logger::default())
            .configure(routes::api::scoped_config)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
