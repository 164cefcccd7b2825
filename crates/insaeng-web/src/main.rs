mod server;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = insaeng_config::load();
    server::run(&config.listen_addr)
}
