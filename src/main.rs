mod app;
mod commands;
mod config;
mod init_config;
mod interaction;
mod layers;
mod part;
mod particle;
mod path;
mod rng;
mod simulation;

fn main() {
    app::run();
}
