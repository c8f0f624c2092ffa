use std::rc::Rc;

use anyhow::Result;

use tickloop_core::logging::{LoggingConfig, init_logging};
use tickloop_core::{Event, GameLoop, LoopConfig};
use tickloop_winit::{Runtime, RuntimeConfig, WinitFrameHost};

/// Plain ticks between pause toggles.
const TOGGLE_EVERY: u64 = 10;

/// Unpaused ticks after which the demo stops its loop.
const RUN_FOR: f64 = 40.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  tickloop demo");
    println!("  pauses every {TOGGLE_EVERY} ticks, stops after {RUN_FOR} unpaused ticks");
    println!("  set TICKLOOP_TICK_RATE to change the pace");
    println!();

    let host = Rc::new(WinitFrameHost::new());
    let game = GameLoop::with_host(host.clone(), LoopConfig::default().tick_rate(4.0).with_env());

    // ── HUD ───────────────────────────────────────────────────────────────
    // Level-triggered and registered first: a satisfied one-shot further down
    // ends the pass, and the title should update regardless.
    {
        let g = game.clone();
        let h = Rc::clone(&host);
        game.add_event(
            Event::new(|| true, move || {
                let s = g.stats();
                if let Some(window) = h.window() {
                    window.set_title(&format!(
                        "tickloop  ticks {:.1}  unpaused {:.1}{}",
                        s.ticks,
                        s.unpaused_ticks,
                        if s.paused { "  [paused]" } else { "" }
                    ));
                }
            })
            .run_while(true),
        );
    }

    // ── Pause toggle ──────────────────────────────────────────────────────
    {
        let g = game.clone();
        let toggler = game.clone();
        game.add_event(Event::new(
            move || {
                let t = g.stats().whole_ticks();
                t > 0 && t % TOGGLE_EVERY == 0
            },
            move || {
                let paused = toggler.toggle_pause();
                log::info!(
                    "tick {}: {}",
                    toggler.stats().whole_ticks(),
                    if paused { "paused" } else { "resumed" }
                );
            },
        ));
    }

    // ── Finish ────────────────────────────────────────────────────────────
    {
        let g = game.clone();
        let finisher = game.clone();
        game.add_event(Event::new(
            move || g.stats().unpaused_ticks >= RUN_FOR,
            move || {
                let s = finisher.stats();
                log::info!(
                    "done after {} frames: ticks={:.2} unpaused={:.2}",
                    s.frames,
                    s.ticks,
                    s.unpaused_ticks
                );
                finisher.terminate();
                // Events hold loop handles; dropping them breaks the cycle.
                finisher.remove_all();
            },
        ));
    }

    Runtime::run(
        RuntimeConfig {
            title: "tickloop".to_string(),
            ..RuntimeConfig::default()
        },
        host,
    )
}
