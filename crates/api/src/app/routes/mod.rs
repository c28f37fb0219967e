use axum::Router;

pub mod books;
pub mod copies;
pub mod loans;
pub mod sites;
pub mod system;
pub mod transfers;
pub mod users;

/// Router for every library endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/books", books::router())
        .nest("/sites", sites::router())
        .nest("/users", users::router())
        .nest("/copies", copies::router())
        .nest("/loans", loans::router())
        .nest("/transfers", transfers::router())
}
