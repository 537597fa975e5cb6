// What you SEE:
// • A paper-colored window. Move the mouse over it to paint.
// • The trail fades and spreads as it ages; colors cycle slowly over time.
// • T toggles the raw trail buffer (grayscale). C clears the trail. ESC quits.

use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use watercolor_trail::cli::Cli;
use watercolor_trail::draw::Drawer;
use watercolor_trail::{AppConfig, FrameBuffer, TrailEngine, shade, touch_queue};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    /* --- Engine + touch queue ---
       The window thread is also the input thread here, but samples still go
       through the queue so the engine only changes inside `frame`. */
    let engine = TrailEngine::new(config.trail.clone())?;
    let (mut touches, mut driver) = touch_queue(engine, config.window.queue_capacity);

    let (w, h) = (config.trail.width, config.trail.height);
    let mut drawer = Drawer::new(&config.window.title, w, h)?;
    let mut screen = FrameBuffer::new(w, h);

    // What the renderer samples; refreshed only when the engine says it changed.
    let mut texture = driver.engine().buffer().clone();

    let mut show_raw = false;
    let mut last_pointer = None;
    let mut time = 0.0_f32;

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut last_frame_time = Instant::now();

    info!(width = w, height = h, "painting surface ready");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = (now - last_frame_time).as_secs_f32();
        last_frame_time = now;
        time += dt;

        /* 1) Inputs */
        if drawer.t_pressed_once() {
            show_raw = !show_raw;
        }
        if drawer.c_pressed_once() {
            driver.engine_mut().clear();
        }
        let pointer = drawer.pointer();
        if let Some(p) = pointer {
            if last_pointer != Some(p) {
                touches.push(p);
            }
        }
        last_pointer = pointer;

        /* 2) Age, evict, redraw the trail; "upload" it if it changed */
        driver.frame(dt);
        if let Some(buffer) = driver.engine_mut().take_upload() {
            texture.clone_from(buffer);
        }

        /* 3) Shade and present */
        if show_raw {
            shade::raw_trail(&texture, &mut screen);
        } else {
            shade::watercolor(&texture, time, config.window.background, &mut screen);
        }
        drawer.present(&screen)?;

        /* 4) FPS + point count, once per second */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            let points = driver.engine().points().len();
            debug!(
                fps,
                points,
                force = driver.engine().force(),
                peak = driver.engine().buffer().peak_strength(),
                "frame stats"
            );
            drawer.set_title(&format!("{} | FPS: {:.1} | points: {}", config.window.title, fps, points));
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    if let Some(path) = &cli.snapshot {
        driver.engine().buffer().save_png(path)?;
        info!(path = %path.display(), "trail snapshot written");
    }

    Ok(())
}
