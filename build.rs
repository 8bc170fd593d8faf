fn main() {
    println!("cargo:rerun-if-env-changed=RELAYLOOP_CONFIG");

    // Host builds (unit + integration tests) need no ESP-IDF environment.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
