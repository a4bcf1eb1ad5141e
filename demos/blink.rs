use rtk_gpio::{GpioClient, PinMode, PinSetup, PinState, PullMode, Result};
use std::{thread, time::Duration};

// Physical header pin with the LED attached.
const BLINK_PIN: u8 = 10;

fn main() -> Result<()> {
    env_logger::init();
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    // This path will be wrong for you. Look in /dev/serial/by-path for your device.
    println!("Opening RTk.GPIO board on {}...", port);
    let mut client = GpioClient::open(&port)?;
    println!("Board opened.");

    client.setup(
        BLINK_PIN,
        PinSetup::new()
            .mode(PinMode::Output)
            .pull(PullMode::Down)
            .initial_state(PinState::High),
    )?;

    println!("Blinking pin {}...", BLINK_PIN);
    for i in 0..6 {
        let state = if i % 2 == 0 {
            PinState::Low
        } else {
            PinState::High
        };
        println!("Setting pin {} {:?}", BLINK_PIN, state);
        client.output(BLINK_PIN, state)?;
        thread::sleep(Duration::from_secs(1));
    }

    client.close();
    Ok(())
}
