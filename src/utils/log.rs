use tracing::Level;

pub fn setup_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // keep stdout for the console output of the driver.
        .with_writer(std::io::stderr)
        .json()
        .init();
}
