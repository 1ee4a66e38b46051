use tilekit::console::Session;
use tilekit::{build_state, init_logging};
use tilekit_settings::SettingsManager;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let settings = SettingsManager::load_default()?;
    tracing::info!(path = %settings.path().display(), "settings ready");
    let state = build_state(settings.config())?;

    let stdin = std::io::stdin();
    let mut session = Session::new(state, stdin.lock(), std::io::stdout(), std::io::stderr());
    session.run()?;

    Ok(())
}
