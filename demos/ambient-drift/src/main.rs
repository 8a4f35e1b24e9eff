// Headless host for penta-engine: steps a manual clock at 60 fps of
// simulated time and prints where every pentagon sits once per
// simulated minute.
//
// Usage: ambient-drift [seed] [config.json]

use penta_engine::{Field, FieldConfig, FieldRunner, ManualClock, ParticleState};

const FPS: f64 = 60.0;
const SIMULATED_SECONDS: f64 = 600.0;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let config = match std::env::args().nth(2) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).expect("read config file");
            FieldConfig::from_json(&text).expect("parse config JSON")
        }
        None => FieldConfig::default(),
    };

    println!(
        "ambient-drift: {} pentagons, seed {}, {:.0} simulated seconds",
        config.particle_count, seed, SIMULATED_SECONDS
    );

    let field = Field::new(config, seed);
    let mut runner = FieldRunner::new(field, ManualClock::new());
    let mut poses: Vec<ParticleState> = Vec::new();

    let frames_per_report = (FPS * 60.0) as u64;
    let mut frame = 0u64;
    loop {
        poses.clear();
        let now = runner.frame(&mut |_: usize, pose: &ParticleState| poses.push(*pose));

        if frame % frames_per_report == 0 {
            print_table(now, &poses);
        }
        if now >= SIMULATED_SECONDS {
            break;
        }

        runner.clock_mut().step(1.0 / FPS);
        frame += 1;
    }
}

fn print_table(now: f64, poses: &[ParticleState]) {
    println!("t = {:>5.0}s", now);
    for (i, p) in poses.iter().enumerate() {
        println!(
            "  #{:<2} pos=({:.3}, {:.3})  angle={:.2}  radius={:.3}  opacity={:.3}",
            i, p.position.x, p.position.y, p.angle, p.radius, p.opacity
        );
    }
}
