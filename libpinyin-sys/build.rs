use std::process::exit;

use libpinyin_build::{Error, PkgConfig, Probe};

fn main() {
    println!("cargo:rerun-if-env-changed=PKG_CONFIG");

    let registry = PkgConfig::from_env();
    let config = match Probe::new("libpinyin").run(&registry) {
        Ok(config) => config,
        Err(Error::Missing(_)) => {
            eprintln!("Please install libpinyin.");
            exit(1);
        }
        Err(e) => {
            eprintln!("libpinyin-sys: {e}");
            exit(1);
        }
    };

    config.emit_cargo();
}
