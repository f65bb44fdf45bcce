//! Minimal repeatable-trigger demo: one section scrolls in and out three
//! times and replays its staggered entrance on every return.

use std::time::Duration;

use unfurl::prelude::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn phase_glyph(phase: ChildPhase) -> char {
    match phase {
        ChildPhase::Hidden => '.',
        ChildPhase::AnimatingIn => '>',
        ChildPhase::Shown => '#',
        ChildPhase::AnimatingOut => '<',
    }
}

fn main() {
    env_logger::init();

    let mut stage = Stage::new(StageConfig::default());
    let words = stage.add_section(
        "provider-list",
        Some(Rect::new(0.0, 100.0, 1280.0, 300.0)),
        ViewportTrigger::new(TriggerMode::Repeatable, -50.0),
        StaggerGroup::new(
            MotionSpec::provider_word(),
            StaggerConfig::new(ms(0), ms(100)).exit(ExitStyle::ReverseStagger),
            5,
        ),
    );

    let mut now = Duration::ZERO;
    for cycle in 0..3 {
        println!("-- pass {} --", cycle + 1);
        for &offset in &[0.0f32, 5000.0] {
            stage.push_event(InputEvent::Scrolled { offset });
            for _ in 0..80 {
                now += ms(16);
                let flags = stage.tick(now);
                if flags.contains(ChangeFlags::NEEDS_PAINT) && now.as_millis() % 96 < 16 {
                    let group = stage.group(words).unwrap();
                    let row: String = (0..group.len()).map(|i| phase_glyph(group.child_phase(i))).collect();
                    println!("t={:>6}ms  [{row}]  opacity {:.2}", now.as_millis(), group.child_state(0).opacity);
                }
            }
        }
    }
}
