// File: crates/scatter-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's raster backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
