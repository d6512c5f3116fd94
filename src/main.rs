use ipv4_tutor::config::{init_logging, Settings};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    init_logging(&settings)?;
    settings.log_warnings();
    //
    log::info!("#Start main()");

    ipv4_tutor::cli::run(&settings)?;

    log::info!("#End main()");
    Ok(())
}
