mod app;
mod catalog;
mod config;
mod error;
mod logging;
mod mpris;
mod player;
mod runtime;
mod transport;
mod ui;

fn main() -> Result<(), error::AppError> {
    runtime::run()
}
