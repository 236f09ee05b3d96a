use std::env;
fn main() {
    dotenvy::dotenv().ok();
    println!("cargo:rerun-if-env-changed=DATABASE_URL");

    if env::var("DATABASE_URL").is_err() {
        println!(
            "cargo:warning=DATABASE_URL is not set, the server will use sqlite://pub_golf.db"
        );
    }
}
