pub mod games;
pub mod giveaways;
pub mod handlers;
pub mod history;
pub mod library;
pub mod middleware;
pub mod prefs;
pub mod profile;
pub mod routes;

pub use routes::create_router;
