/// Pacman subprocess adapter
mod client;

pub use client::PacmanClient;
