use std::path::Path;

use cubelight::options::Options;
use cubelight::Viewer;

fn main() {
    env_logger::init();

    // Optional single argument: path to an options TOML file.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => {
                log::info!("loaded options from {path}");
                opts
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
