use std::time::{Duration, Instant};

use log::{error, trace};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vip8_core::Machine;
use vip8_display::Display;

use crate::keymap::keymap;

/// The two independent cadences of the run loop.
pub struct Timing {
    /// Instructions per second.
    pub ips: u64,
    /// Timer decrements per second.
    pub timer_hz: u64,
}

/// Drives the machine until the program faults or the user quits.
///
/// Each iteration executes one instruction (skipped while a key wait is in
/// progress), presents the frame buffer if it changed, consumes one pending
/// input transition, ticks the timers when their wall-clock interval has
/// elapsed, and sleeps until the next instruction deadline.
pub fn run(mut machine: Machine, timing: Timing) -> anyhow::Result<()> {
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl).map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let step_interval = Duration::from_secs_f64(1.0 / timing.ips as f64);
    let timer_interval = Duration::from_secs_f64(1.0 / timing.timer_hz as f64);
    let mut last_timer_tick = Instant::now();

    loop {
        let deadline = Instant::now() + step_interval;

        let addr = machine.pc();
        match machine.step() {
            Ok(Some(instr)) => trace!("{addr:#05X} {instr} v{:02X?}", machine.registers()),
            Ok(None) => {} // waiting for a key
            Err(e) => {
                error!("machine halted: {e}");
                return Err(e.into());
            }
        }

        if let Some(frame) = machine.poll_frame() {
            display.render(&frame).map_err(anyhow::Error::msg)?;
        }

        match events.poll_event() {
            Some(Event::Quit { .. })
            | Some(Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }) => return Ok(()),
            Some(Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            }) => {
                if let Some(vk) = keymap(key) {
                    machine.key_press(vk);
                }
            }
            Some(Event::KeyUp {
                keycode: Some(key),
                ..
            }) => {
                if let Some(vk) = keymap(key) {
                    machine.key_release(vk);
                }
            }
            _ => {}
        }

        // timers run on their own wall-clock cadence, including during a
        // key wait
        if last_timer_tick.elapsed() >= timer_interval {
            machine.tick_timers();
            last_timer_tick = Instant::now();
        }

        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
    }
}
