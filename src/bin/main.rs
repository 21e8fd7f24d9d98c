#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    time::Rate,
};
use log::{LevelFilter, info};

use lcd2004::{Config as LcdConfig, Lcd2004};
use menupad_core::app::{MenuApp, MenuConfig};
use menupad_hal_esp32s3::{
    input::keypad::{KeypadConfig, MatrixKeypad},
    platform::{console::SerialConsole, display::PanelDisplay, time::CycleClock},
};

const PANEL_I2C_HZ: u32 = 100_000;
const KEY_DEBOUNCE_POLLS: u8 = 2;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: menupad starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let mut delay = Delay::new();

    // Panel wiring used by this board:
    // SDA=GPIO18, SCL=GPIO17, PCF8574 backpack at 0x27
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_hz(PANEL_I2C_HZ));
    let i2c = I2c::new(peripherals.I2C0, i2c_config)
        .unwrap()
        .with_sda(peripherals.GPIO18)
        .with_scl(peripherals.GPIO17);

    let mut lcd = Lcd2004::new(i2c, LcdConfig::default());
    esp_println::println!("display: init begin (SDA=18 SCL=17 addr=0x27)");
    if let Err(err) = lcd.initialize(&mut delay) {
        esp_println::println!("display: initialize failed");
        info!("display initialize failed: {:?}", err);
    } else {
        esp_println::println!("display: initialize ok");
    }
    if let Err(err) = lcd.backlight_on() {
        info!("display backlight failed: {:?}", err);
    }

    // Keypad wiring used by this board:
    // rows (driven) GPIO4..GPIO8 top to bottom,
    // columns (pull-up) GPIO9..GPIO12 left to right
    let output_cfg = OutputConfig::default();
    let rows = [
        Output::new(peripherals.GPIO4, Level::High, output_cfg),
        Output::new(peripherals.GPIO5, Level::High, output_cfg),
        Output::new(peripherals.GPIO6, Level::High, output_cfg),
        Output::new(peripherals.GPIO7, Level::High, output_cfg),
        Output::new(peripherals.GPIO8, Level::High, output_cfg),
    ];
    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let cols = [
        Input::new(peripherals.GPIO9, input_cfg),
        Input::new(peripherals.GPIO10, input_cfg),
        Input::new(peripherals.GPIO11, input_cfg),
        Input::new(peripherals.GPIO12, input_cfg),
    ];

    let keypad = MatrixKeypad::new(
        rows,
        cols,
        KeypadConfig::default().with_debounce_polls(KEY_DEBOUNCE_POLLS),
    )
    .unwrap();

    let display = PanelDisplay::new(lcd, delay);
    let console = SerialConsole::new();
    let clock = CycleClock::new(Delay::new());

    let mut app = MenuApp::new(keypad, display, console, clock, MenuConfig::default());
    info!("menu supervisor starting");

    match app.run() {
        Ok(never) => match never {},
        Err(err) => {
            esp_println::println!("menu supervisor stopped");
            info!("menu supervisor stopped: {:?}", err);
            loop {}
        }
    }
}
