fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let code = walk_cli::run()?;
    std::process::exit(code);
}
