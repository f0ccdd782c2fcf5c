use actix_web::web;

pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/questions")
                .route("", web::get().to(questions::index))
                .route("", web::post().to(questions::create))
                .route("/{id}", web::get().to(questions::detail)),
        ),
    );
}
