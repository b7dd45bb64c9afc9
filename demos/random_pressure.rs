use pressure_gauge::{Easing, Gauge, GaugeCommand, GaugeConfig};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = GaugeConfig::builder()
        .title("Random pressure")
        .easing(Easing::Bounce)
        .animation_ms(500)
        .build();
    let gauge = Gauge::new(config);

    let (sender, receiver) = mpsc::channel();

    // Mostly valid pressures, with the occasional out-of-range value to
    // exercise the "Invalid range" toast.
    thread::spawn(move || {
        let mut rng = rand::rng();
        loop {
            let value: i64 = if rng.random_bool(0.15) {
                rng.random_range(101..200)
            } else {
                rng.random_range(0..=100)
            };
            if sender.send(GaugeCommand::Submit(value.to_string())).is_err() {
                break;
            }
            // Half the time retarget mid-flight.
            let pause = if rng.random_bool(0.5) { 250 } else { 900 };
            thread::sleep(Duration::from_millis(pause));
        }
    });

    println!("Submitting random pressures; close the window or press Esc to exit");
    gauge.show_with_commands(receiver)?;
    Ok(())
}
