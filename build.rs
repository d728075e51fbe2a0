use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("AllowlistVoting", "abi/AllowlistVoting.json")?
        .generate()?
        .write_to_file("src/abi/allowlist_voting.rs")?;
    anyhow::Ok(())
}
