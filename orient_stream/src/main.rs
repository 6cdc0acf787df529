//! orient_panel — low-resolution console status display.
//!
//! Drives an [`OrientationFilter`] at R=18 from a scripted device replay
//! and redraws a single status line: three 18-character angle bars plus
//! arm, lock, and pose columns.

use std::f32::consts::PI;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use glam::{EulerRot, Quat};

use orient_stream::{
    spawn_source, Arm, DeviceEvent, EventPump, OrientationFilter, OrientationSample, Pose,
    ScriptSource, ScriptStep,
};

const RESOLUTION: i32 = 18;

fn main() {
    // Panel output owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orient_stream=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Orient Panel — armband orientation status (R=18)      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let script = demo_script();
    let total = script.total_duration();
    let rx = spawn_source(script);

    let mut filter = OrientationFilter::new(RESOLUTION);
    let mut pump = EventPump::new(rx);

    if let Err(e) = pump.wait_for_pairing(&mut filter, Duration::from_secs(10)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let start = Instant::now();
    while start.elapsed() < total + Duration::from_millis(200) {
        pump.run(&mut filter, Duration::from_millis(20));
        redraw(&filter);
    }
    println!();
    println!();
    println!("  Replay finished.");
}

// ── scripted device sweep ────────────────────────────────────────────────────

/// Pairing handshake, a yaw sweep, a mid-sweep calibration tap, a fist
/// hold, a spread, and teardown.
fn demo_script() -> ScriptSource {
    let mut steps = vec![
        ScriptStep::after_ms(50, DeviceEvent::Paired),
        ScriptStep::after_ms(100, DeviceEvent::ArmSynced(Arm::Right)),
        ScriptStep::after_ms(100, DeviceEvent::Unlocked),
    ];

    let mut timestamp = 0u64;
    let mut sweep = |steps: &mut Vec<ScriptStep>, from: f32, to: f32, n: usize| {
        for i in 0..n {
            let t = i as f32 / (n - 1) as f32;
            let yaw = from + (to - from) * t;
            let pitch = (yaw * 1.5).sin() * 0.4;
            timestamp += 30_000;
            steps.push(ScriptStep::after_ms(
                30,
                DeviceEvent::Orientation(OrientationSample {
                    quat: Quat::from_euler(EulerRot::ZYX, yaw, pitch, 0.3),
                    timestamp,
                }),
            ));
        }
    };

    sweep(&mut steps, -PI * 0.4, PI * 0.4, 40);
    steps.push(ScriptStep::after_ms(100, DeviceEvent::Pose(Pose::DoubleTap)));
    steps.push(ScriptStep::after_ms(300, DeviceEvent::Pose(Pose::Rest)));
    sweep(&mut steps, PI * 0.4, -PI * 0.2, 30);
    steps.push(ScriptStep::after_ms(100, DeviceEvent::Pose(Pose::Fist)));
    sweep(&mut steps, -PI * 0.2, 0.0, 15);
    steps.push(ScriptStep::after_ms(100, DeviceEvent::Pose(Pose::FingersSpread)));
    steps.push(ScriptStep::after_ms(400, DeviceEvent::Pose(Pose::Rest)));
    steps.push(ScriptStep::after_ms(200, DeviceEvent::Unpaired));

    ScriptSource::new(steps)
}

// ── panel rendering ──────────────────────────────────────────────────────────

fn redraw(filter: &OrientationFilter) {
    let arm = match filter.which_arm() {
        Some(a) if filter.on_arm() => a.label(),
        _ => "-",
    };
    let lock = if filter.is_unlocked() { "unlocked" } else { "locked" };
    print!(
        "\r  roll {}  pitch {}  yaw {}  arm:{:<5} {:<8} [{:<6}]",
        bar(filter.roll()),
        bar(filter.pitch()),
        bar(filter.yaw()),
        arm,
        lock,
        filter.pose().label(),
    );
    io::stdout().flush().ok();
}

/// An 18-character bar with a marker at the reading's position.
/// Out-of-range readings (possible after calibration) pin to the ends.
fn bar(reading: i32) -> String {
    let pos = reading.clamp(0, RESOLUTION - 1) as usize;
    let mut s = String::with_capacity(RESOLUTION as usize + 2);
    s.push('[');
    for i in 0..RESOLUTION as usize {
        s.push(if i == pos { '█' } else { '·' });
    }
    s.push(']');
    s
}
