type Result<T> = std::result::Result<T, anyhow::Error>;

fn main() -> Result<()> {
    rps::cli::run(rps::Rule::LiteralMove)
}
