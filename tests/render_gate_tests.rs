use std::time::Duration;

use glam::Vec2;
use line_animator::animations::{create_animation, SceneKind};
use line_animator::animator::Animator;
use line_animator::config::AnimatorConfig;
use line_animator::scheduler::{CancellationToken, FrameInfo, RenderGate, TickLoop};

#[cfg(test)]
mod gate_sequence_tests {
    use super::*;

    #[test]
    fn test_documented_tick_sequence() {
        // frameTime=16.67, ticks at t=0,10,20ms -> renders at t=0 and t=20
        let mut gate = RenderGate::new(16.67);

        let renders: Vec<bool> = [0.0, 10.0, 20.0]
            .iter()
            .map(|&t| gate.should_render(t))
            .collect();

        assert_eq!(renders, vec![true, false, true]);
    }

    #[test]
    fn test_exact_interval_boundary_renders() {
        let mut gate = RenderGate::new(10.0);

        assert!(gate.should_render(0.0));
        assert!(gate.should_render(10.0), "delta == interval must render");
    }

    #[test]
    fn test_last_render_only_advances_on_renders() {
        let mut gate = RenderGate::new(10.0);

        assert!(gate.should_render(0.0));
        assert!(!gate.should_render(4.0));
        assert!(!gate.should_render(8.0));
        assert_eq!(gate.last_render_ms(), Some(0.0));

        // 12-0 >= 10: renders, and the mark moves to 12 (not 4 or 8)
        assert!(gate.should_render(12.0));
        assert_eq!(gate.last_render_ms(), Some(12.0));
    }

    #[test]
    fn test_repeated_sub_interval_ticks_are_idempotent() {
        let mut gate = RenderGate::new(16.67);
        assert!(gate.should_render(100.0));

        let state_before = gate.last_render_ms();
        for i in 0..1000 {
            assert!(!gate.should_render(100.0 + i as f64 * 0.016));
        }

        assert_eq!(gate.last_render_ms(), state_before);
    }

    #[test]
    fn test_zero_interval_renders_every_tick() {
        let mut gate = RenderGate::new(0.0);

        for t in 0..10 {
            assert!(gate.should_render(t as f64));
        }
    }
}

#[cfg(test)]
mod tick_loop_integration_tests {
    use super::*;

    fn animator_with_interval(frame_time_ms: f64) -> Animator {
        let config = AnimatorConfig {
            frame_time_ms,
            ..AnimatorConfig::default()
        };
        Animator::new(
            &config,
            create_animation(SceneKind::Chain, Vec2::ZERO),
            (800, 600),
        )
    }

    #[test]
    fn test_loop_drives_animator_and_gate_together() {
        let mut animator = animator_with_interval(5.0);
        let tick_loop = TickLoop::new(Duration::from_millis(5), CancellationToken::new());

        let mut ticks = 0u64;
        let mut renders = 0u64;
        tick_loop.run(
            |frame| {
                ticks += 1;
                if animator.tick(frame) {
                    renders += 1;
                }
            },
            Some(20),
        );

        assert_eq!(ticks, 20);
        // First tick always renders; pacing keeps most ticks at or above
        // the interval
        assert!(renders >= 1);
        assert!(renders <= ticks);
    }

    #[test]
    fn test_cancelled_loop_runs_no_ticks() {
        let token = CancellationToken::new();
        token.cancel();
        let tick_loop = TickLoop::new(Duration::from_millis(1), token);

        let mut ticks = 0u64;
        tick_loop.run(|_| ticks += 1, None);

        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_tight_interval_renders_every_tick() {
        // With a zero frame interval every tick passes the gate
        let mut animator = animator_with_interval(0.0);
        let tick_loop = TickLoop::new(Duration::ZERO, CancellationToken::new());

        let mut renders = 0u64;
        tick_loop.run(
            |frame| {
                if animator.tick(frame) {
                    renders += 1;
                }
            },
            Some(10),
        );

        assert_eq!(renders, 10);
    }

    #[test]
    fn test_gate_survives_out_of_band_frame_info() {
        // Manually replayed frames behave like the documented sequence
        let mut animator = animator_with_interval(16.67);

        assert!(animator.tick(&FrameInfo::new(0, 0.0, 0.0)));
        assert!(!animator.tick(&FrameInfo::new(1, 0.010, 0.010)));
        assert!(animator.tick(&FrameInfo::new(2, 0.020, 0.010)));
    }
}
