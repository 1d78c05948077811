/// Result type for LED strip operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by [`LedStrip`](crate::led_strip::LedStrip).
#[derive(Debug, derive_more::Display, derive_more::Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A color was written before [`LedStrip::init`](crate::led_strip::LedStrip::init).
    #[display("LED strip used before init")]
    NotInitialized,
    /// The LED output reported a failure.
    #[display("LED output fault: {_0}")]
    Hardware(HardwareFault),
}

/// Which call into the LED output failed.
#[derive(Debug, derive_more::Display, derive_more::Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// Bringing up the output failed.
    #[display("begin failed")]
    Begin,
    /// Transmitting a frame failed.
    #[display("show failed")]
    Show,
}
