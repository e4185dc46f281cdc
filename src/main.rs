use guessing_game::{Session, SessionConfig, Terminal};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut session = Session::new(SessionConfig::default())?;
    session.run(&mut Terminal::stdio())?;
    Ok(())
}
