fn main() {
    // Generate C# bindings for .NET interop
    // Format flags live in src/formats.rs and are mirrored by hand on the managed side
    std::fs::create_dir_all("bindings/csharp").expect("Failed to create bindings directory");

    csbindgen::Builder::default()
        .input_extern_file("src/lib.rs")
        .input_extern_file("src/decoder.rs")
        .input_extern_file("src/error.rs")
        .input_extern_file("src/types.rs")
        .csharp_dll_name("zxing_ffi")
        .csharp_namespace("Zxing.Net")
        .csharp_class_name("NativeMethods")
        .csharp_class_accessibility("public")
        .csharp_use_nint_types(false) // Use UIntPtr/IntPtr for netstandard2.0 compatibility
        .generate_csharp_file("bindings/csharp/NativeMethods.g.cs")
        .expect("Failed to generate C# bindings");

    println!("cargo:rerun-if-changed=src/");
}
