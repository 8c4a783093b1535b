fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "proto/profile.proto";

    // Tell cargo to recompile if the proto file changes
    println!("cargo:rerun-if-changed={}", proto_file);

    // Use a vendored protoc when none is provided by the environment
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(false) // We only need the client
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
