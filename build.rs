use chrono::Datelike;

fn main() {
    // Capture the build year for the footer copyright line
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Email provider settings are read with option_env! at compile time
    println!("cargo:rerun-if-env-changed=EMAILJS_SERVICE_ID");
    println!("cargo:rerun-if-env-changed=EMAILJS_TEMPLATE_ID");
    println!("cargo:rerun-if-env-changed=EMAILJS_PUBLIC_KEY");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
