pub mod http_handlers;

use actix_web::web;

/// Registers the `/posts` routes. Expects `web::Data<Arc<PostService>>` in app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .app_data(http_handlers::json_config())
            .service(
                web::resource("")
                    .route(web::get().to(http_handlers::list_posts))
                    .route(web::post().to(http_handlers::create_post)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(http_handlers::get_post))
                    .route(web::put().to(http_handlers::update_post))
                    .route(web::delete().to(http_handlers::delete_post)),
            ),
    );
}
