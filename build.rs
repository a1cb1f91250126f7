fn main() {
    println!("cargo:rerun-if-env-changed=VERSIONMONITOR_APP_NAME");

    built::write_built_file().expect("Failed to acquire build-time information");
}
