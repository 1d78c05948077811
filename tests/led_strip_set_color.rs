#![allow(missing_docs, reason = "test crate")]
//! Host-level tests for `LedStrip` against recording outputs.

use strip_envoy::{
    Error, HardwareFault,
    color::{Rgb, colors, hsv, rgb},
    led_strip::{Frame1d, LED_STRIP_LENGTH, LedOutput, LedStrip, SmartLedsOutput},
};

/// Records every call the strip makes into the hardware.
#[derive(Default)]
struct RecordingOutput<const N: usize> {
    begin_count: usize,
    shown: Vec<Frame1d<N>>,
    /// Number of upcoming `begin` calls that fail.
    begin_failures: usize,
    fail_show: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct LineFault;

impl<const N: usize> LedOutput<N> for RecordingOutput<N> {
    type Error = LineFault;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.begin_count += 1;
        if self.begin_failures > 0 {
            self.begin_failures -= 1;
            return Err(LineFault);
        }
        Ok(())
    }

    fn show(&mut self, frame: &Frame1d<N>) -> Result<(), Self::Error> {
        if self.fail_show {
            return Err(LineFault);
        }
        self.shown.push(*frame);
        Ok(())
    }
}

fn ready_strip<const N: usize>() -> LedStrip<RecordingOutput<N>, N> {
    let mut led_strip = LedStrip::new(RecordingOutput::default());
    led_strip.init().expect("init succeeds");
    led_strip
}

#[test]
fn default_length_is_32() {
    assert_eq!(LED_STRIP_LENGTH, 32);
    assert_eq!(LedStrip::<RecordingOutput<32>>::LEN, 32);
}

#[test]
fn new_strip_is_black_and_not_ready() {
    let led_strip: LedStrip<RecordingOutput<8>, 8> = LedStrip::new(RecordingOutput::default());
    assert!(!led_strip.is_ready());
    assert_eq!(*led_strip.frame(), Frame1d::default());
    assert_eq!(Frame1d::<8>::default(), Frame1d::filled(colors::BLACK));
    assert_eq!(led_strip.output().begin_count, 0);
}

#[test]
fn set_color_before_init_fails_fast() {
    let mut led_strip: LedStrip<RecordingOutput<8>, 8> = LedStrip::new(RecordingOutput::default());
    assert_eq!(led_strip.set_color(0x00FF_0000), Err(Error::NotInitialized));
    assert!(led_strip.output().shown.is_empty());
    assert_eq!(*led_strip.frame(), Frame1d::new());
}

#[test]
fn set_color_fills_every_pixel_then_shows_once() {
    let mut led_strip: LedStrip<RecordingOutput<32>> = ready_strip();
    led_strip.set_color(0x0012_3456).expect("set_color succeeds");

    let expected = Rgb::new(0x12, 0x34, 0x56);
    assert!(led_strip.frame().iter().all(|pixel| *pixel == expected));
    assert_eq!(led_strip.output().shown, vec![Frame1d::filled(expected)]);
}

#[test]
fn set_color_ignores_high_byte() {
    let mut led_strip: LedStrip<RecordingOutput<4>, 4> = ready_strip();
    led_strip.set_color(0xFF00_FF00).expect("set_color succeeds");
    assert_eq!(*led_strip.frame(), Frame1d::filled(colors::LIME));
}

#[test]
fn set_color_accepts_hsv_and_rgb() {
    let mut led_strip: LedStrip<RecordingOutput<3>, 3> = ready_strip();
    led_strip.set_color(hsv(240.0, 1.0, 1.0)).expect("set_color succeeds");
    led_strip.set_color(rgb(1.0, 0.0, 0.0)).expect("set_color succeeds");

    let shown = &led_strip.output().shown;
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0], Frame1d::filled(colors::BLUE));
    assert_eq!(shown[1], Frame1d::filled(colors::RED));
}

#[test]
fn later_color_replaces_earlier_one() {
    let mut led_strip: LedStrip<RecordingOutput<5>, 5> = ready_strip();
    led_strip.set_color(0x00FF_FFFF).expect("set_color succeeds");
    led_strip.set_color(0x0000_0000).expect("set_color succeeds");
    assert_eq!(*led_strip.frame(), Frame1d::new());
}

#[test]
fn init_twice_keeps_output_and_frame() {
    let mut led_strip: LedStrip<RecordingOutput<16>, 16> = ready_strip();
    led_strip.set_color(0x0000_00FF).expect("set_color succeeds");

    led_strip.init().expect("second init succeeds");

    assert!(led_strip.is_ready());
    assert_eq!(led_strip.output().begin_count, 1);
    assert_eq!(led_strip.frame().len(), 16);
    assert_eq!(*led_strip.frame(), Frame1d::filled(colors::BLUE));
}

#[test]
fn failed_begin_reports_hardware_fault_and_allows_retry() {
    let output = RecordingOutput::<4> {
        begin_failures: 1,
        ..RecordingOutput::default()
    };
    let mut led_strip: LedStrip<_, 4> = LedStrip::new(output);

    assert_eq!(led_strip.init(), Err(Error::Hardware(HardwareFault::Begin)));
    assert!(!led_strip.is_ready());
    assert_eq!(led_strip.set_color(0x00FF_0000), Err(Error::NotInitialized));

    led_strip.init().expect("retry succeeds");
    assert!(led_strip.is_ready());
    assert_eq!(led_strip.output().begin_count, 2);

    led_strip.set_color(0x00FF_0000).expect("set_color succeeds");
    assert_eq!(led_strip.output().shown, vec![Frame1d::filled(colors::RED)]);
}

#[test]
fn failed_show_reports_hardware_fault() {
    let output = RecordingOutput::<4> {
        fail_show: true,
        ..RecordingOutput::default()
    };
    let mut led_strip: LedStrip<_, 4> = LedStrip::new(output);
    led_strip.init().expect("init succeeds");

    let result = led_strip.set_color(0x00FF_0000);
    assert_eq!(result, Err(Error::Hardware(HardwareFault::Show)));
    assert_eq!(*led_strip.frame(), Frame1d::filled(colors::RED));
}

#[test]
fn error_messages_name_the_fault() {
    assert_eq!(
        Error::Hardware(HardwareFault::Show).to_string(),
        "LED output fault: show failed"
    );
    assert_eq!(Error::NotInitialized.to_string(), "LED strip used before init");
}

/// A `smart_leds` driver that keeps the pixels of each write.
#[derive(Default)]
struct CapturingWriter {
    writes: Vec<Vec<Rgb>>,
}

impl smart_leds::SmartLedsWrite for CapturingWriter {
    type Error = core::convert::Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.writes.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[test]
fn smart_leds_driver_receives_whole_frame() {
    let output = SmartLedsOutput::new(CapturingWriter::default());
    let mut led_strip: LedStrip<_> = LedStrip::new(output);
    led_strip.init().expect("init succeeds");
    led_strip.set_color(hsv(120.0, 1.0, 1.0)).expect("set_color succeeds");

    let writer = led_strip.into_output().into_inner();
    assert_eq!(writer.writes.len(), 1);
    assert_eq!(writer.writes[0], vec![colors::LIME; LED_STRIP_LENGTH]);
}
