fn main() -> anyhow::Result<()> {
    vrmkit::cli::run_cli()
}
