use std::env;

mod cli;
mod clipboard;
mod entropy;
mod exits;
mod notify;
mod pass;
mod settings;
mod terminal;
mod tui;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CLASSPASS_LOG", "off"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logging();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    };
    std::process::exit(code);
}
