use anyhow::{Context, Result};
use std::io;

use hostel_registry::{run, Console, Hostel};

fn main() -> Result<()> {
    // Fresh state on every run: empty roster, 100 vacant rooms
    let mut hostel = Hostel::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    run(&mut hostel, &mut console).context("console session failed")?;

    Ok(())
}
