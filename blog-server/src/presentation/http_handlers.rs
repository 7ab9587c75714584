use crate::application::BlogService;
use crate::domain::post::CreatePostRequest;
use crate::domain::DomainError;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

// Преобразование DomainError в HttpResponse
fn error_to_response(err: DomainError) -> HttpResponse {
    let status_code = err.to_status_code();
    let message = err.to_string();

    match status_code {
        400 => HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        _ => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": "Internal server error" })),
    }
}

// ============== Post Handlers ==============

pub async fn list_posts(blog_service: web::Data<Arc<BlogService>>) -> impl Responder {
    match blog_service.list_posts().await {
        Ok(posts) => {
            tracing::debug!("Listing {} posts", posts.len());
            HttpResponse::Ok().json(posts)
        }
        Err(err) => error_to_response(err),
    }
}

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    post_data: web::Json<CreatePostRequest>,
) -> impl Responder {
    tracing::info!("Creating post by {}", post_data.author);

    match blog_service.create_post(post_data.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::post_repository::InMemoryPostRepository;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use blog_core::{ErrorResponse, Post};
    use serde_json::json;

    fn blog_service() -> web::Data<Arc<BlogService>> {
        web::Data::new(Arc::new(BlogService::new(Arc::new(
            InMemoryPostRepository::new(),
        ))))
    }

    #[actix_rt::test]
    async fn create_then_list_in_id_order() {
        let app = test::init_service(
            App::new()
                .app_data(blog_service())
                .configure(crate::presentation::configure),
        )
        .await;

        for title in ["A", "B"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "title": title, "body": "x", "author": "y" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert!(posts[0].id < posts[1].id);
        assert!(posts[0].timestamp <= posts[1].timestamp);
    }

    #[actix_rt::test]
    async fn empty_author_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(blog_service())
                .configure(crate::presentation::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "C", "body": "x", "author": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Validation error: Author cannot be empty");
    }
}
