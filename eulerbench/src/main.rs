fn main() -> anyhow::Result<()> {
    eulerbench::run()
}
