use actix_cors::Cors;

pub fn configure_cors() -> Cors {
    let allowed_origin =
        std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    Cors::default()
        .allowed_origin(&allowed_origin)
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600) // Cache preflight responses for 1 hour
}
