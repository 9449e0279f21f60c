use goose::prelude::*;

use auto_lasttest::AutoSettings;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    auto_lasttest::register(GooseAttack::initialize()?, &AutoSettings::default())?
        .execute()
        .await?;

    Ok(())
}
