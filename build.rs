fn main() {
    // ── libvips linking ──────────────────────────────────────────────────────
    //
    // The libvips-rs bindings crate ships no build script of its own, so the
    // `libvips` feature needs us to tell cargo where the library lives.
    //
    // Linux: the system libvips-dev package is sufficient.
    // macOS: `brew install vips`, or point VIPS_DIR at a custom prefix.
    // Windows: extract vips-dev-w64 from
    //   https://github.com/libvips/build-win64-mxe/releases
    //   and set VIPS_DIR to the extracted directory.
    println!("cargo:rerun-if-env-changed=VIPS_DIR");

    if std::env::var_os("CARGO_FEATURE_LIBVIPS").is_some() {
        link_libvips();
    }
}

fn link_libvips() {
    let lib_dir = std::env::var("VIPS_DIR")
        .ok()
        .map(|dir| std::path::Path::new(&dir).join("lib"));

    if let Some(lib_dir) = &lib_dir {
        if lib_dir.exists() {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        } else {
            println!("cargo:warning=VIPS_DIR is set but '{}' does not exist.", lib_dir.display());
        }
    }

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // GLib symbols (g_free, g_object_unref, …) called directly by
        // libvips-rs must be linked explicitly next to libvips itself.
        println!("cargo:rustc-link-lib=dylib=libvips");
        println!("cargo:rustc-link-lib=dylib=libglib-2.0");
        println!("cargo:rustc-link-lib=dylib=libgobject-2.0");
    } else {
        println!("cargo:rustc-link-lib=dylib=vips");
    }
}
