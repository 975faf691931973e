use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata consumed by pkg_version()/clap_long_version()
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
