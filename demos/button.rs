use rtk_gpio::{GpioClient, PinMode, PinSetup, PinState, PullMode, Result};
use std::{thread, time::Duration};

// A microswitch with one side on 3.3V and the other on physical pin 10.
const BUTTON_PIN: u8 = 10;

fn main() -> Result<()> {
    env_logger::init();
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    println!("Opening RTk.GPIO board on {}...", port);
    let mut client = GpioClient::open(&port)?;
    println!("Board opened.");

    client.setup(
        BUTTON_PIN,
        PinSetup::new().mode(PinMode::Input).pull(PullMode::Down),
    )?;

    println!("Waiting for button presses on pin {} (Ctrl+C to stop)...", BUTTON_PIN);
    let mut last = PinState::Low;
    loop {
        let state = client.input(BUTTON_PIN)?;
        if state != last {
            match state {
                PinState::High => println!("Pressed"),
                PinState::Low => println!("Released"),
            }
            last = state;
        }
        thread::sleep(Duration::from_millis(100));
    }
    // Loop runs forever; the close() sweep would need Ctrl+C handling.
}
