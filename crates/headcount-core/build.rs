// File: crates/headcount-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need for raster output.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW for system font discovery
        println!("cargo:rustc-link-lib=advapi32");
    }
}
