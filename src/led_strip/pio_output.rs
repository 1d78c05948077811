//! WS2812 output driven by a Pico [PIO](crate#glossary) state machine.

use core::convert::Infallible;

use embassy_futures::block_on;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};

use super::{Frame1d, LedOutput};

/// [`LedOutput`] over embassy-rp's DMA-fed `PioWs2812` program.
///
/// The PIO write is async; `show` blocks until the DMA transfer completes so that
/// [`LedStrip::set_color`](super::LedStrip::set_color) returns with the frame sent.
///
/// ```ignore
/// let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
/// let program = PioWs2812Program::new(&mut common);
/// let driver = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_0, &program);
/// let mut led_strip: LedStrip<_> = LedStrip::new(PioLedOutput::new(driver));
/// ```
pub struct PioLedOutput<'d, PIO, const SM: usize, const N: usize, ORDER>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    driver: PioWs2812<'d, PIO, SM, N, ORDER>,
}

impl<'d, PIO, const SM: usize, const N: usize, ORDER> PioLedOutput<'d, PIO, SM, N, ORDER>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    /// Wrap a configured PIO WS2812 driver.
    #[must_use]
    pub fn new(driver: PioWs2812<'d, PIO, SM, N, ORDER>) -> Self {
        Self { driver }
    }
}

impl<PIO, const SM: usize, const N: usize, ORDER> LedOutput<N>
    for PioLedOutput<'_, PIO, SM, N, ORDER>
where
    PIO: Instance,
    ORDER: RgbColorOrder,
{
    type Error = Infallible;

    // `PioWs2812::new` already loaded the program and started the state machine.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn show(&mut self, frame: &Frame1d<N>) -> Result<(), Self::Error> {
        block_on(self.driver.write(frame));
        Ok(())
    }
}
