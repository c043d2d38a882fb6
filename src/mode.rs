//! Benchmark mode selection and dispatch

use core::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{Clock, DIVIDER, Error, Suite};

/// Hardware benchmark families
///
/// These are bound by the target through [`Peripherals`].
/// Discriminants are the mode numbers.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::FromRepr,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum Peripheral {
    /// GPIO output toggle timing
    GpioToggle = 2,
    /// PWM setup timing
    Pwm = 3,
    /// ADC read timing
    Adc = 4,
    /// Interrupt latency
    Interrupt = 5,
    /// UART transmission
    Uart = 6,
    /// I2C master write
    I2c = 7,
}

/// Benchmark mode
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// The software suite, mode 1
    Software,
    /// One hardware benchmark, modes 2 to 7
    Peripheral(Peripheral),
}

impl Mode {
    /// Mode number
    pub fn number(&self) -> u8 {
        match self {
            Self::Software => 1,
            Self::Peripheral(p) => *p as _,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            1 => Ok(Self::Software),
            v => Peripheral::from_repr(v)
                .map(Self::Peripheral)
                .ok_or(Error::InvalidMode(v)),
        }
    }
}

/// Hardware benchmark bindings of a target
///
/// Each benchmark performs its own hardware setup and writes its own CSV
/// header and result line(s) to the sink. Benchmarks of continuous phenomena
/// may report periodically and never return.
pub trait Peripherals {
    /// Run one hardware benchmark
    fn run<W: Write>(&mut self, bench: Peripheral, sink: &mut W) -> Result<(), Error>;
}

/// Target without hardware benchmarks
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPeripherals;

impl Peripherals for NoPeripherals {
    fn run<W: Write>(&mut self, bench: Peripheral, _sink: &mut W) -> Result<(), Error> {
        Err(Error::Unsupported(bench))
    }
}

/// How a dispatch ended
///
/// In all cases the caller is expected to idle afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The software suite completed with this many records
    Suite(usize),
    /// A hardware benchmark returned
    Peripheral(Peripheral),
    /// The mode number was not recognized
    Invalid(u8),
}

/// Print the mode banner and run the selected benchmark
///
/// An unknown mode is reported on the sink and is not an error.
///
/// ```
/// # use mcubench::{FnClock, NoPeripherals, Outcome, Suite, dispatch};
/// let mut out = String::new();
/// let o = dispatch(9, &Suite::default(), &FnClock(|| 0), &mut out, &mut NoPeripherals);
/// assert_eq!(o, Ok(Outcome::Invalid(9)));
/// assert_eq!(
///     out,
///     "Benchmark Mode: 9\n----------------------\nInvalid benchmark mode selected.\n"
/// );
/// ```
pub fn dispatch<C: Clock, W: Write, P: Peripherals>(
    mode: u8,
    suite: &Suite,
    clock: &C,
    sink: &mut W,
    peripherals: &mut P,
) -> Result<Outcome, Error> {
    writeln!(sink, "Benchmark Mode: {mode}")?;
    writeln!(sink, "{DIVIDER}")?;
    match Mode::try_from(mode) {
        Ok(Mode::Software) => {
            log::info!("software suite");
            suite.run(clock, sink).map(Outcome::Suite)
        }
        Ok(Mode::Peripheral(p)) => {
            log::info!("{p:?} benchmark");
            peripherals.run(p, sink)?;
            Ok(Outcome::Peripheral(p))
        }
        Err(e) => {
            log::warn!("{e}");
            writeln!(sink, "Invalid benchmark mode selected.")?;
            Ok(Outcome::Invalid(mode))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{SuiteConfig, testing::StepClock};
    use miniconf::Leaf;
    use strum::IntoEnumIterator;

    #[test]
    fn numbers() {
        assert_eq!(Mode::try_from(1), Ok(Mode::Software));
        for p in Peripheral::iter() {
            let m = Mode::try_from(p as u8).unwrap();
            assert_eq!(m, Mode::Peripheral(p));
            assert_eq!(m.number(), p as u8);
        }
        assert_eq!(Mode::try_from(2), Ok(Mode::Peripheral(Peripheral::GpioToggle)));
        assert_eq!(Mode::try_from(7), Ok(Mode::Peripheral(Peripheral::I2c)));
        for v in [0, 8, 255] {
            assert_eq!(Mode::try_from(v), Err(Error::InvalidMode(v)));
        }
    }

    struct Recorder(Vec<Peripheral>);

    impl Peripherals for Recorder {
        fn run<W: Write>(&mut self, bench: Peripheral, sink: &mut W) -> Result<(), Error> {
            self.0.push(bench);
            writeln!(sink, "task,method,time_us")?;
            writeln!(sink, "adc,read,12")?;
            Ok(())
        }
    }

    #[test]
    fn software() {
        let config = SuiteConfig {
            fft: Leaf(8),
            ..Default::default()
        };
        let suite = Suite::new(config).unwrap();
        let mut out = String::new();
        let o = dispatch(1, &suite, &StepClock::new(0, 1), &mut out, &mut NoPeripherals);
        assert_eq!(o, Ok(Outcome::Suite(21)));
        assert!(out.starts_with("Benchmark Mode: 1\n----------------------\ntask,method,n,"));
        assert!(out.ends_with("fft,radix2,8,1\n----------------------\n"));
    }

    #[test]
    fn hardware() {
        let mut out = String::new();
        let mut r = Recorder(vec![]);
        let clock = StepClock::new(0, 1);
        let o = dispatch(4, &Suite::default(), &clock, &mut out, &mut r);
        assert_eq!(o, Ok(Outcome::Peripheral(Peripheral::Adc)));
        assert_eq!(r.0, [Peripheral::Adc]);
        assert_eq!(clock.reads(), 0);
        assert_eq!(
            out,
            "Benchmark Mode: 4\n----------------------\ntask,method,time_us\nadc,read,12\n"
        );

        let o = dispatch(6, &Suite::default(), &clock, &mut out, &mut NoPeripherals);
        assert_eq!(o, Err(Error::Unsupported(Peripheral::Uart)));
    }
}
