mod logging;
mod render;
mod shell;
mod species;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Terminal);
    shell::run()
}
