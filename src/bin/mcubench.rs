//! Run the benchmark harness on the host and stream to stdout

use std::process::ExitCode;

use mcubench::{Error, IoSink, NoPeripherals, Outcome, StdClock, Suite, dispatch};

/// An unknown mode is reported on stdout and is not a failure
fn exit_code(ret: &Result<Outcome, Error>) -> u8 {
    match ret {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let mode = std::env::args()
        .nth(1)
        .map_or(Ok(1), |arg| arg.parse::<u8>())
        .unwrap_or(0);
    let mut out = IoSink::new(std::io::stdout().lock());
    let ret = dispatch(
        mode,
        &Suite::default(),
        &StdClock::default(),
        &mut out,
        &mut NoPeripherals,
    );
    if let Err(e) = &ret {
        match out.error() {
            Some(io) => eprintln!("{e}: {io}"),
            None => eprintln!("{e}"),
        }
    }
    ExitCode::from(exit_code(&ret))
}

#[cfg(test)]
mod test {
    use super::*;
    use mcubench::Peripheral;

    #[test]
    fn exit_codes() {
        for ret in [
            Ok(Outcome::Invalid(9)),
            Ok(Outcome::Suite(21)),
            Ok(Outcome::Peripheral(Peripheral::Adc)),
        ] {
            assert_eq!(exit_code(&ret), 0);
        }
        assert_eq!(
            exit_code(&Err(Error::Unsupported(Peripheral::Uart))),
            1
        );
    }
}
