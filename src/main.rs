use clap::Parser;

use ortho_signup::application::SignupApplication;
use ortho_signup::config::{AppConfig, Cli};

fn main() {
    let config = AppConfig::from(Cli::parse());
    if let Err(error) = ortho_signup::logging::init(config.log_level) {
        eprintln!("logger already installed: {error}");
    }
    log::debug!("starting with {config:?}");

    SignupApplication::new().with_config(config).run();
}
