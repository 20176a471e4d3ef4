// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use light_2color::InputChannel;
use light_2color::tasks::{ButtonKind, button_task, light_page_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Eingabe-Channel (Button Tasks → Light Page Task)
    static INPUT_CHANNEL: static_cell::StaticCell<InputChannel> = static_cell::StaticCell::new();
    let input_channel = &*INPUT_CHANNEL.init(InputChannel::new());

    // Taster: active-low mit internem Pull-Up
    // GPIO2 = dunkler, GPIO3 = heller, GPIO9 = Auswahl (Klick / langer Druck)
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        (Input::new(peripherals.GPIO2, button_config), ButtonKind::Left),
        (Input::new(peripherals.GPIO3, button_config), ButtonKind::Right),
        (Input::new(peripherals.GPIO9, button_config), ButtonKind::Select),
    ];
    for (pin, kind) in buttons {
        spawner
            .spawn(button_task(pin, kind, input_channel.sender()))
            .expect("button task pool exhausted");
    }

    // Aktiver Buzzer an GPIO10 für die Ansage der Helligkeitsstufe
    let buzzer = Output::new(peripherals.GPIO10, Level::Low, OutputConfig::default());

    // Spawn Light Page Task (WS2812 an GPIO8 über RMT + Buzzer + Eingaben)
    spawner
        .spawn(light_page_task(
            peripherals.GPIO8,
            peripherals.RMT,
            buzzer,
            input_channel.receiver(),
        ))
        .expect("light page task already running");

    info!("Light page firmware started");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
