use spincube::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    pollster::block_on(spincube::app::run(DemoConfig::default()))
}
