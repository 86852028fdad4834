//! Prints an Argon2 encoded hash for seeding `usuarios.password`.

use clap::Parser;
use listings_api::service::password::hash_password;

#[derive(Parser)]
#[command(name = "hash-password", about = "Hash a password for the usuarios table")]
struct Args {
    /// Plaintext password to hash
    password: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let encoded = hash_password(&args.password)?;
    println!("{}", encoded);
    Ok(())
}
