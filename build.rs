include!("build/config.rs");

fn main() {
    let mut cfgs = config::Cfgs::new();

    // the Cargo feature and the environment variable select the same policy
    if cfgs.is_feature_enabled("strict-keys") {
        cfgs.enable(config::Cfgs::ACORNJSON_STRICT_KEYS);
    }

    cfgs.apply();
}
