use anyhow::Result;

fn main() -> Result<()> {
    deskcalc::cli::run()
}
