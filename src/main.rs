use std::{num::NonZero, rc::Rc};

use glam::Vec2;
use padded_label::{
    Font, LayoutContext, TextWidget, UIRenderer, Widget, config::Config, logging,
    render::ui::uirenderer::TextureHandle,
};

fn load_config() -> Config {
    let path = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .or_else(|| Config::default_path().filter(|path| path.exists()));

    match path {
        Some(path) => Config::load(&path).unwrap_or_else(|err| {
            log::warn!("Could not load {}: {err}. Using defaults.", path.display());
            Config::default()
        }),
        None => Config::default(),
    }
}

fn main() {
    if let Err(err) = logging::init_logger(log::LevelFilter::Debug) {
        eprintln!("Failed to initialize logger: {err}");
    }

    let config = load_config();

    // 16x6 grid of 7x12 glyphs starting at ' '.
    let font = Rc::new(Font::new(
        TextureHandle::new(NonZero::<u32>::MIN, 112, 72),
        Vec2::new(7.0, 12.0),
        ' ',
    ));

    let mut labels: Vec<_> = config
        .labels
        .iter()
        .map(|label| label.build(&font))
        .collect();

    let viewport = Vec2::from(config.viewport);
    let mut cursor = Vec2::ZERO;
    let mut ui_renderer = UIRenderer::new();

    for label in &mut labels {
        let used = label.layout(&LayoutContext {
            max_size: (viewport - cursor).max(Vec2::ZERO),
            cursor,
        });
        label.draw(&mut ui_renderer);

        log::info!(
            "{:?}: rect {:?}, text rect {:?}, natural size {}",
            label.text(),
            label.rect(),
            label.text_rect(label.rect()),
            label.size_hint()
        );

        cursor.y += used.y + config.spacing;
    }

    let batches = ui_renderer.take_batches();
    log::info!(
        "Recorded {} batches with {} quads",
        batches.len(),
        batches.iter().map(|batch| batch.len()).sum::<usize>()
    );
}
