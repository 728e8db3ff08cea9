fn main() -> anyhow::Result<()> {
    galleria::run()
}
