fn main() {
    if cfg!(feature = "header-check") {
        build_abi_helper();
    }
}

#[cfg(feature = "header-check")]
fn build_abi_helper() {
    let mut build = cc::Build::new();

    build.flag_if_supported("-Wno-unused-parameter");

    if let Ok(dir) = std::env::var("AALIB_INCLUDE_DIR") {
        build.include(dir);
    }
    println!("cargo:rerun-if-env-changed=AALIB_INCLUDE_DIR");

    build.file("abi_helper.c");
    track(&["abi_helper.c"]);

    build.compile("aa_abi_helper");
}

#[cfg(not(feature = "header-check"))]
fn build_abi_helper() {}

#[allow(dead_code)]
fn track(paths: &[&str]) {
    for p in paths {
        println!("cargo:rerun-if-changed={}", p);
    }
}
