use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use biglibrary::catalog::controller::{add_book, export_books, find_book_by_id, remove_book, update_book};
use biglibrary::core::controller::AppState;
use biglibrary::core::domain::Configuration;
use biglibrary::images::controller::{add_image, find_image_by_id};
use biglibrary::rubrics::controller::{add_rubric, find_rubric_by_synonym};
use biglibrary::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let addr: SocketAddr = config.bind_address.parse()?;
    let state = AppState::new(config);

    let app = Router::new()
        .route("/books", post(add_book))
        .route("/books/export", get(export_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/images", post(add_image))
        .route("/images/:id", get(find_image_by_id))
        .route("/rubrics", post(add_rubric))
        .route("/rubrics/:synonym", get(find_rubric_by_synonym))
        .with_state(state);

    tracing::info!(%addr, "catalog listening");
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
