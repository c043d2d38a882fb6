#![no_std]
#![no_main]

use cortex_m::asm;
use defmt::*;
use rp2040_hal::{self as hal, clocks::init_clocks_and_plls, pac, watchdog::Watchdog, Timer};
use {defmt_rtt as _, panic_probe as _};

use mcubench::{dispatch, NoPeripherals, Suite};
use mcubench_embedded::{DefmtLines, TimerClock};

/// Second stage bootloader
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Mode 1 is the software suite, 2 to 7 the hardware benchmarks
const BENCHMARK_MODE: u8 = 1;

#[hal::entry]
fn main() -> ! {
    info!("Setup");
    let mut pac = unwrap!(pac::Peripherals::take());
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = unwrap!(init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok());
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    info!("Starting");
    let mut out = DefmtLines::default();
    match dispatch(
        BENCHMARK_MODE,
        &Suite::default(),
        &TimerClock(&timer),
        &mut out,
        &mut NoPeripherals,
    ) {
        Ok(outcome) => info!("Done: {}", Debug2Format(&outcome)),
        Err(e) => error!("{}", Display2Format(&e)),
    }

    loop {
        asm::wfi();
    }
}
