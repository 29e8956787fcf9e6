mod camera;
mod config;
mod error;
mod export;
mod lights;
mod materials;
mod objects;
mod scenes;
mod types;

use config::SceneConfig;
use scenes::random;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SceneConfig::default();

    log::info!("Building scene...");
    let now = std::time::SystemTime::now();
    let mut rng = rand::thread_rng();
    let scene = random::build(&config, &mut rng);

    log::info!("Writing {} records to {}", scene.len(), config.output.display());
    if let Err(e) = export::save_scene(&scene, &config.output) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    let elapsed = match now.elapsed() {
        Ok(elapsed) => elapsed,
        Err(e) => {
            log::error!("Failed to get elapsed time: {}", e);
            std::time::Duration::from_secs(0)
        }
    };

    log::info!("Done. Time: {:?}", elapsed);
}
