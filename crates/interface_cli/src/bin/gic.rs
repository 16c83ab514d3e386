//! Customer registry command-line tool

fn main() -> anyhow::Result<()> {
    interface_cli::run()
}
