use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use studyrank_backend::config::cors::configure_cors;
use studyrank_backend::config::database::{connect_to_mongodb, get_server_address};
use studyrank_backend::config::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let address = get_server_address();
    let mongodb_client = connect_to_mongodb().await;

    log::info!("Server is running on {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .app_data(web::Data::new(mongodb_client.clone()))
            .configure(configure_routes)
    })
    .bind(address)?
    .run()
    .await
}
