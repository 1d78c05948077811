#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future, panic};

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
    pio_programs::ws2812::{PioWs2812, PioWs2812Program},
};
use strip_envoy::{
    Result,
    color::hsv,
    led_strip::{LED_STRIP_LENGTH, LedStrip, PioLedOutput},
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

// Nice trick: Two "mains" let's us use Results.
#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // A 32-LED strip on PIN_0, driven by PIO0 state machine 0.
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver: PioWs2812<'_, PIO0, 0, LED_STRIP_LENGTH, _> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_0, &program);

    let mut led_strip: LedStrip<_> = LedStrip::new(PioLedOutput::new(driver));
    led_strip.init()?;

    // Hue 30 degrees at full saturation, quarter brightness.
    let orange = hsv(30.0, 1.0, 0.25);
    info!("Painting {} LEDs {:#x}", LED_STRIP_LENGTH, orange);
    led_strip.set_color(orange)?;

    future::pending().await // run forever
}
