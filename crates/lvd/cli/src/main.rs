fn main() -> anyhow::Result<()> {
    lvd_cli::run()?;
    Ok(())
}
