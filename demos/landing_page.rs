//! Headless walkthrough of a full landing page: six sections with their
//! own trigger policies, a spring-smoothed pointer follower, and a click
//! sound on the call-to-action. Run with `RUST_LOG=debug` to watch the
//! triggers and cleanup fire.

use std::rc::Rc;
use std::time::Duration;

use log::info;
use unfurl::prelude::*;
use unfurl::sound::AudioError;

struct LoggingCursorHost;

impl CursorHost for LoggingCursorHost {
    fn suppress_native_cursor(&self) {
        info!("native cursor hidden");
    }
    fn restore_native_cursor(&self) {
        info!("native cursor restored");
    }
}

struct LoggingAudioSink;

impl AudioSink for LoggingAudioSink {
    fn play(&self, path: &str, volume: f32) -> Result<(), AudioError> {
        info!("playing {path} at volume {volume}");
        Ok(())
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn main() {
    env_logger::init();

    let mut stage = Stage::new(StageConfig::new().width(1280.0).height(800.0));

    // Section layout down the page, top to bottom.
    let hero = stage.add_section(
        "hero",
        Some(Rect::new(0.0, 0.0, 1280.0, 700.0)),
        ViewportTrigger::new(TriggerMode::Repeatable, -100.0),
        StaggerGroup::new(MotionSpec::hero_item(), StaggerConfig::new(ms(300), ms(200)), 4),
    );
    let providers = stage.add_section(
        "provider-list",
        Some(Rect::new(0.0, 700.0, 1280.0, 300.0)),
        ViewportTrigger::new(TriggerMode::Repeatable, -50.0),
        StaggerGroup::new(
            MotionSpec::provider_word(),
            StaggerConfig::new(ms(0), ms(100)),
            5,
        ),
    );
    let spotlight = stage.add_section(
        "spotlight",
        Some(Rect::new(0.0, 1000.0, 1280.0, 800.0)),
        ViewportTrigger::new(TriggerMode::Once, -100.0),
        StaggerGroup::new(
            MotionSpec::dashboard_tile(),
            StaggerConfig::new(ms(200), ms(300)),
            3,
        ),
    );
    let features = stage.add_section(
        "features",
        Some(Rect::new(0.0, 1800.0, 1280.0, 900.0)),
        ViewportTrigger::new(TriggerMode::Once, -100.0),
        StaggerGroup::new(
            MotionSpec::feature_card(),
            StaggerConfig::new(ms(0), ms(200)),
            6,
        ),
    );
    let cta = stage.add_section(
        "call-to-action",
        Some(Rect::new(0.0, 2700.0, 1280.0, 500.0)),
        ViewportTrigger::new(TriggerMode::Once, -100.0),
        StaggerGroup::new(MotionSpec::cta_item(), StaggerConfig::new(ms(200), ms(150)), 3),
    );
    let footer = stage.add_section(
        "footer",
        Some(Rect::new(0.0, 3200.0, 1280.0, 300.0)),
        ViewportTrigger::new(TriggerMode::Once, -100.0),
        StaggerGroup::new(MotionSpec::footer_block(), StaggerConfig::default(), 1),
    );
    let sections = [
        ("hero", hero),
        ("provider-list", providers),
        ("spotlight", spotlight),
        ("features", features),
        ("call-to-action", cta),
        ("footer", footer),
    ];

    stage.attach_pointer_follower(PointerFollower::new(), Rc::new(LoggingCursorHost));

    let click = ClickSound::new(Rc::new(LoggingAudioSink));

    // A visitor scrolling steadily down the page while wiggling the
    // pointer, pressing the call-to-action button near the end.
    let mut button = Emphasis::button();
    for frame in 0u64..600 {
        let now = ms(frame * 16);
        let t = frame as f32 / 600.0;

        stage.push_event(InputEvent::Scrolled { offset: t * 2800.0 });
        stage.push_event(InputEvent::PointerMoved {
            x: 640.0 + (t * 20.0).sin() * 300.0,
            y: 400.0,
        });
        if frame == 520 {
            stage.push_event(InputEvent::PointerPressed);
            button.set_pressed(true, now);
            click.play();
        }
        if frame == 530 {
            stage.push_event(InputEvent::PointerReleased);
            button.set_pressed(false, now);
        }

        let flags = stage.tick(now);
        button.step(now);

        if flags.contains(ChangeFlags::NEEDS_PAINT) && frame % 30 == 0 {
            let pose = stage.follower_pose().unwrap();
            println!(
                "t={:>5}ms follower=({:>6.1},{:>6.1}) button scale {:.3}",
                now.as_millis(),
                pose.position.x,
                pose.position.y,
                button.scale(),
            );
            for (name, id) in &sections {
                let group = stage.group(*id).unwrap();
                if group.is_animating() {
                    println!("  {name}: child 0 opacity {:.2}", group.child_state(0).opacity);
                }
            }
        }
    }

    stage.dispose();
    println!("listeners after teardown: {}", stage.listener_count());
}
