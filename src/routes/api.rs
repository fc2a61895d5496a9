use actix_web::{HttpResponse, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::routes::openapi::ApiDoc;
use crate::utils::helpers::{json_config, query_config};

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Must precede the "/api" scope.
        .service(
            SwaggerUi::new("/api/docs/{_:.*}")
                .url("/api/docs/openapi.json", ApiDoc::openapi()),
        )
        .service(
            web::scope("/api")
                .service(web::resource("/health").route(web::get().to(handlers::health::health)))
                .service(
                    web::resource("/ready").route(web::get().to(handlers::health::readiness)),
                )
                .service(
                    web::scope("/announcements")
                        .service(
                            web::resource("")
                                .route(web::get().to(handlers::announcements::all))
                                .route(web::post().to(handlers::announcements::create))
                                .route(web::head().to(HttpResponse::MethodNotAllowed)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(handlers::announcements::get_announcement))
                                .route(web::patch().to(handlers::announcements::update))
                                .route(web::delete().to(handlers::announcements::delete)),
                        ),
                )
                .service(
                    web::scope("/quizzes")
                        .service(
                            web::resource("")
                                .route(web::get().to(handlers::quizzes::all))
                                .route(web::post().to(handlers::quizzes::create))
                                .route(web::head().to(HttpResponse::MethodNotAllowed)),
                        )
                        // Must precede "/{id}".
                        .service(
                            web::resource("/upcoming")
                                .route(web::get().to(handlers::quizzes::upcoming)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(handlers::quizzes::get_quiz))
                                .route(web::patch().to(handlers::quizzes::update))
                                .route(web::delete().to(handlers::quizzes::delete)),
                        ),
                ),
        );
}
