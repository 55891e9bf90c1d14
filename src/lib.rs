pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod view;
pub mod websocket;
