use std::env;
use std::fs;
use std::path::Path;

/// Variables que el frontend lee con `option_env!`
const TRACKED_VARS: &[&str] = &[
    "BACKEND_URL",
    "GOOGLE_MAPS_API_KEY",
    "ENABLE_LOGGING",
    "SDK_LOAD_WARNING_MS",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
];

fn main() {
    for var in TRACKED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, admite comillas alrededor del valor
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. GOOGLE_MAPS_API_KEY will be empty unless set in the environment.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
