use anyhow::Result;
use std::io::Write;

use ask::runtime::{run, EXIT_SUCCESS};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let code = run(std::env::args_os(), &mut stdout).await?;
    stdout.flush()?;

    // Exit with appropriate code
    if code != EXIT_SUCCESS {
        std::process::exit(code);
    }

    Ok(())
}
