use anyhow::Context;
use jailfs::{config::{self, Config}, logging, server, JailedFs};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path = PathBuf::from("jailfs.toml");
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() { eprintln!("--config requires a path"); std::process::exit(2); }
                config_path = PathBuf::from(&args[i]);
            }
            other => { eprintln!("unknown argument: {other}"); std::process::exit(2); }
        }
        i += 1;
    }

    let cfg = Config::load(&config_path).context("loading config")?;
    cfg.validate().context("validating config")?;

    let root = config::canonical_root(&cfg.root.root_dir).context("canonicalizing root_dir")?;
    let fs = JailedFs::new(root);
    let info = fs
        .stat("")
        .map_err(|e| anyhow::anyhow!("root {}: {} ({})", fs.root().display(), e, e.code()))?;
    if !info.is_dir {
        anyhow::bail!("root is not a directory: {}", fs.root().display());
    }

    let addr = format!("{}:{}", cfg.server.bind_addr, cfg.server.port);
    info!(addr = %addr, root = %fs.root().display(), base_path = %cfg.server.base_path, "jailfs ready");

    server::serve(cfg, fs).await
}
