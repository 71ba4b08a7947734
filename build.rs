use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // esp-hal linker script
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    let version = Utc::now().format("%Y.%m.%d-%H%M");
    println!("cargo:rustc-env=BUILD_VERSION={}", version);
}
