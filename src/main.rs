use std::time::Duration;

use clap::Parser;
use glam::Vec2;
use winit::event_loop::EventLoop;

use line_animator::animations::create_animation;
use line_animator::animator::Animator;
use line_animator::cli::Cli;
use line_animator::config::AnimatorConfig;
use line_animator::scheduler::{CancellationToken, TickLoop};
use line_animator::window::App;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(ticks) = cli.headless {
        run_headless(&cli, &config, ticks);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(
        config,
        cli.scene.kind(),
        (cli.width, cli.height),
        CancellationToken::new(),
    );

    log::info!("starting windowed animation, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}

/// Drive the animator without a window: same tick pacing and render gate,
/// no GPU work. Useful for profiling the update step and for CI.
fn run_headless(cli: &Cli, config: &AnimatorConfig, ticks: u64) {
    let animation = create_animation(cli.scene.kind(), Vec2::ZERO);
    let mut animator = Animator::new(config, animation, (cli.width, cli.height));

    let token = CancellationToken::new();
    let tick_loop = TickLoop::new(
        Duration::from_secs_f64(config.frame_time_ms / 1000.0),
        token,
    );

    let mut rendered = 0u64;
    tick_loop.run(
        |frame| {
            if animator.tick(frame) {
                rendered += 1;
            }
        },
        Some(ticks),
    );

    log::info!("headless run finished: {rendered}/{ticks} ticks rendered");
}
