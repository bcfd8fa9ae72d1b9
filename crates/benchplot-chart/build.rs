// File: crates/benchplot-chart/build.rs
// Summary: Links the Windows system library Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used when enumerating system fonts.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
