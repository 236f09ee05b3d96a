#[rocket::main]
async fn main() -> Result<(), api::LaunchError> {
    api::launch().await?.launch().await?;
    Ok(())
}
