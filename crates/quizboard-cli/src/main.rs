mod archive;
mod catalog;
mod command;
mod recording;
mod schema;
mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    command::run()
}
