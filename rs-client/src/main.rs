mod scene;
mod sink;
mod timing;
mod world;

use std::path::PathBuf;

use clap::Parser;
use rs_entity::ModelRegistry;
use rs_shadow::appearance::TexturePackAlpha;
use rs_shadow::{SHADOW_PASS, ShadowAssembler, ShadowSettings};
use tracing::{Level, debug, info, warn};

use scene::DemoScene;
use sink::FrameSink;
use timing::{ShadowPassTimings, Timing};
use world::DemoWorld;

#[derive(Parser)]
#[command(name = "umbra", about = "Run the entity shadow pipeline over a scripted demo arena")]
struct Cli {
    /// Number of game ticks to simulate
    #[arg(long, default_value_t = 200)]
    ticks: u64,
    /// Starting time of day in ticks (6000 is noon, 18000 is midnight)
    #[arg(long, default_value_t = 18_000)]
    time_of_day: u64,
    /// Shadow settings TOML file
    #[arg(long, short)]
    settings: Option<PathBuf>,
    /// Texture pack `textures/` directory (defaults to the bundled assets)
    #[arg(long)]
    textures: Option<PathBuf>,
    /// Log every frame and every shadow
    #[arg(long, short)]
    verbose: bool,
}

fn load_settings(path: Option<&PathBuf>) -> ShadowSettings {
    let Some(path) = path else {
        return ShadowSettings::default();
    };
    match ShadowSettings::load(path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("{err}; using default shadow settings");
            ShadowSettings::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(if cli.verbose { Level::TRACE } else { Level::INFO })
        .init();

    info!("Starting umbra shadow demo");

    let settings = load_settings(cli.settings.as_ref());
    debug!("shadow settings: {settings:?}");
    debug!("shadow pass state: {SHADOW_PASS:?}");

    let textures = cli
        .textures
        .map(TexturePackAlpha::new)
        .unwrap_or_else(TexturePackAlpha::from_assets);
    let registry = ModelRegistry::vanilla();
    let mut assembler = ShadowAssembler::new(settings, registry.clone(), textures);

    let mut world = DemoWorld::arena(cli.time_of_day);
    let mut scene = DemoScene::arena();
    let mut sink = FrameSink::default();
    let mut timings = ShadowPassTimings::default();
    info!(
        "arena ready: {} entities, {} light emitters",
        scene.entities.len(),
        world.emitter_count()
    );

    for tick in 0..cli.ticks {
        world.tick();
        for id in scene.tick(tick, &registry) {
            debug!("entity {} despawned", id.0);
            assembler.forget_entity(id);
        }

        sink.clear();
        let snapshots = scene.snapshots();
        let timing = Timing::start();
        let stats = assembler.render_frame(&world, &snapshots, &mut sink);
        let ms = timings.record(timing);

        debug!(
            "tick {tick}: {} drawn, {} unlit, {} unsupported, {} triangles, {:.2} blocks², mean opacity {:.2}, {ms:.3} ms",
            stats.drawn,
            stats.unlit,
            stats.unsupported,
            sink.triangles,
            sink.area,
            sink.mean_opacity()
        );
        if tick % 20 == 0 {
            info!(
                "tick {tick}: {} shadows, {} tracked entities",
                sink.shadows,
                assembler.states().len()
            );
        }
    }

    info!(
        "done: {} frames, mean {:.3} ms, worst {:.3} ms per shadow pass",
        timings.frames,
        timings.mean_ms(),
        timings.worst_ms
    );
}
