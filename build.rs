use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

fn write_twiddle_table() {
    // One entry per radix-2 stage `s`, `m = 1 << s`, up to the target's usize width.
    let depth: u32 = env::var("CARGO_CFG_TARGET_POINTER_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or(usize::BITS);

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("twiddle_table.rs");
    let mut file = File::create(dest_path).unwrap();

    writeln!(
        file,
        "/// Stage twiddle factors `[cos, sin]` of `-2 pi / (1 << stage)`.\n\
         pub(crate) const STAGE_TWIDDLE: [[f32; 2]; {depth}] = ["
    )
    .unwrap();
    for s in 0..depth {
        // Compute in f64 and round once to f32.
        let (sin, cos) = (-2.0 * PI / 2f64.powi(s as i32)).sin_cos();
        writeln!(file, "    [{:?}, {:?}],", cos as f32, sin as f32).unwrap();
    }
    writeln!(file, "];").unwrap();
}

fn main() {
    write_twiddle_table();
    println!("cargo:rerun-if-changed=build.rs");
}
