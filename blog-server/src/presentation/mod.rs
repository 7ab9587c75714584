pub mod http_handlers;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .route("", web::get().to(http_handlers::list_posts))
            .route("", web::post().to(http_handlers::create_post)),
    );
}
