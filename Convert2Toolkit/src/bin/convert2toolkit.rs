fn main() -> anyhow::Result<()> {
    convert2toolkit::cli::run_cli()
}
