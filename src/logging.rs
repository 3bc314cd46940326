use tracing::Level;

/// Install a fmt subscriber. `debug` turns on per-keystroke decisions.
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool) {
    let level = if debug { Level::TRACE } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
