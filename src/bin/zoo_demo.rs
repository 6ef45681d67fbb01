use std::io::{self, IsTerminal};
use zoo_demo::{demo, logging, DemoConfig, DemoError};

fn main() -> Result<(), DemoError> {
    logging::init();

    let stdout = io::stdout();
    let config = DemoConfig {
        color: stdout.is_terminal(),
        ..DemoConfig::script()?
    };
    demo::run(&config, stdout.lock())?;
    Ok(())
}
