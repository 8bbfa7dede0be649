mod app;
mod backend;
mod config;
mod library;
mod mpris;
mod player;
mod queue;
mod runtime;
mod seek;
mod transport;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
