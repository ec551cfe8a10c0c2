use std::env;

/// Name of the build-time variable carrying the packaged implementation version.
const IMPLEMENTATION_VERSION_VAR: &str = "LIB_VERSION_IMPLEMENTATION";

fn main() {
    println!("cargo:rerun-if-env-changed={}", IMPLEMENTATION_VERSION_VAR);

    // Only forward the value when the packaging step provided one, so that
    // `option_env!` sees it as absent otherwise.
    if let Ok(version) = env::var(IMPLEMENTATION_VERSION_VAR) {
        println!("cargo:rustc-env={}={}", IMPLEMENTATION_VERSION_VAR, version);
    }
}
