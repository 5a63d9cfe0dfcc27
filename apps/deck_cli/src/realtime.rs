//! Wall-clock replay: each step waits until its offset from the start of the session.

use deck_core::{DeckController, MonotonicClock, ReplayFrame};
use shared::protocol::SessionScript;
use tokio::time::{sleep_until, Instant};

pub async fn replay_realtime<R>(
    controller: &mut DeckController<R, MonotonicClock>,
    script: &SessionScript,
    settle_ms: Option<u64>,
    mut emit: impl FnMut(ReplayFrame) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let clock = *controller.clock();

    for step in script.steps() {
        sleep_until(Instant::from_std(clock.instant_at(step.at_ms))).await;
        let outcome = controller.handle(step.input);
        emit(ReplayFrame::capture(
            controller,
            step.at_ms,
            Some(step.input),
            outcome.changed,
            outcome.prevent_default,
        ))?;
    }

    if let Some(settle_ms) = settle_ms {
        let at_ms = script.last_at_ms().saturating_add(settle_ms);
        sleep_until(Instant::from_std(clock.instant_at(at_ms))).await;
        let changed = controller.tick();
        emit(ReplayFrame::capture(controller, at_ms, None, changed, false))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{ControllerSnapshot, Settings, SlideList};
    use shared::domain::SlideId;

    fn controller(settings: &Settings) -> DeckController<(), MonotonicClock> {
        let slides = SlideList::new((0..3).map(|i| (SlideId::new(format!("s{i}")), ())))
            .expect("slides");
        DeckController::new(slides, settings, MonotonicClock::new())
    }

    #[tokio::test]
    async fn realtime_replay_lets_the_navbar_timer_fire() {
        let settings = Settings {
            skip_entrance: true,
            navbar_hide_ms: 20,
            ..Settings::default()
        };
        let script = SessionScript::from_json(
            r#"[
                {"at_ms": 0, "input": {"type": "next_clicked"}},
                {"at_ms": 5, "input": {"type": "key", "payload": {"key": "space"}}}
            ]"#,
        )
        .expect("script");

        let mut controller = controller(&settings);
        let mut frames = Vec::new();
        replay_realtime(&mut controller, &script, Some(60), |frame| {
            frames.push(frame);
            Ok(())
        })
        .await
        .expect("replay");

        assert_eq!(frames.len(), 3);
        assert!(frames[1].prevent_default);
        match &frames[2].snapshot {
            ControllerSnapshot::Deck(nav) => {
                assert_eq!(nav.current_index, 2);
                assert!(nav.navbar_hidden);
            }
            other => panic!("expected deck, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn settle_on_empty_script_is_measured_from_session_start() {
        let settings = Settings {
            skip_entrance: true,
            ..Settings::default()
        };
        let script = SessionScript::from_json("[]").expect("script");

        let mut controller = controller(&settings);
        let mut frames = Vec::new();
        replay_realtime(&mut controller, &script, Some(10), |frame| {
            frames.push(frame);
            Ok(())
        })
        .await
        .expect("replay");

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].at_ms, 10);
        assert!(frames[0].input.is_none());
        assert!(!frames[0].changed);
    }
}
