// Entrypoint for the registration program.
// - Keeps `main` small: load the enrollment file and hand the app to the
//   menu loop.
// - Returns `anyhow::Result`; only console failures reach this point.

use course_registration::{app::App, ui::Terminal, FILE_NAME};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout();
    let mut app = App::new(FILE_NAME);
    app.load(&mut stdout);

    // Blocks until the user chooses "Exit".
    app.run(&mut Terminal, &mut stdout)?;
    Ok(())
}
