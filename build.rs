fn main() {
    // ESP-IDF cfg/link values are only meaningful for espidf-enabled builds;
    // host test builds have nothing to emit.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
