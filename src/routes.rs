use actix_web::web;

use crate::handlers::{
    general::{api_health_check, get_info, health_check, root},
    process::process_message,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(api_health_check))
                .route("/process", web::post().to(process_message))
                .route("/info", web::get().to(get_info)),
        );
}
