use clap::Parser;
use lessons::console::AppBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    AppBuilder::new().build().run()
}
